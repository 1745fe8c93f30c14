//! Fetch coordination around the drill-down controller.
//!
//! The session never performs I/O. Callers ask it for a request
//! (carrying a [`Ticket`]), run the fetch however they like, and hand
//! the outcome back. Outcomes whose ticket has been superseded are
//! dropped; failures leave the view untouched and queue one [`Notice`].

use std::collections::VecDeque;
use std::fmt;

use geovote_types::{MemberVoteSummary, RegionNode};

use crate::controller::{ChildRef, DrillDownController, NavigationError, RenderSurface, Viewport};
use crate::sequence::{RequestSequence, Ticket};
use crate::summary::SummaryView;
use crate::tree::NodeId;

pub const TREE_LOAD_FAILED: &str = "트리맵 초기 데이터를 가져오지 못했습니다.";
pub const MEMBER_LOAD_FAILED: &str = "표결 정보를 가져오지 못했습니다.";
pub const NO_MEMBER: &str = "이 지역구에는 등록된 의원 정보가 없습니다.";

pub fn popup_title(member_name: &str) -> String {
    format!("{} 의원은 이렇게 투표했네요 📝🗳️", member_name)
}

/// Non-fatal message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRequest {
    pub ticket: Ticket,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRequest {
    pub ticket: Ticket,
    pub member_name: String,
    pub age: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    /// A newer request for the same target was issued meanwhile.
    Stale,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Descended(NodeId),
    MemberRequested(MemberRequest),
    /// District without a sitting member; a notice was queued.
    NoMember,
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberPopup {
    pub title: String,
    pub summary: MemberVoteSummary,
    pub view: SummaryView,
}

#[derive(Debug)]
pub struct TreemapSession {
    controller: DrillDownController,
    age: Option<u32>,
    tree_requests: RequestSequence,
    member_requests: RequestSequence,
    popup: Option<MemberPopup>,
    notices: VecDeque<Notice>,
}

impl TreemapSession {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            controller: DrillDownController::new(viewport),
            age: None,
            tree_requests: RequestSequence::new(),
            member_requests: RequestSequence::new(),
            popup: None,
            notices: VecDeque::new(),
        }
    }

    pub fn controller(&self) -> &DrillDownController {
        &self.controller
    }

    /// Term whose tree is currently installed.
    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn popup(&self) -> Option<&MemberPopup> {
        self.popup.as_ref()
    }

    /// A tree request is outstanding.
    pub fn tree_pending(&self) -> bool {
        self.tree_requests.is_pending()
    }

    /// A member request is outstanding. Navigating away or installing a
    /// new tree abandons it.
    pub fn member_pending(&self) -> bool {
        self.member_requests.is_pending()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.controller.set_viewport(viewport);
    }

    /// Start loading the tree for `age`. Any earlier tree request becomes
    /// stale.
    pub fn request_tree(&mut self, age: u32) -> TreeRequest {
        let ticket = self.tree_requests.issue();
        tracing::debug!(age, seq = ticket.seq(), "tree requested");
        TreeRequest { ticket, age }
    }

    pub fn complete_tree<E: fmt::Display>(
        &mut self,
        request: &TreeRequest,
        result: Result<RegionNode, E>,
    ) -> Applied {
        if !self.tree_requests.is_current(request.ticket) {
            tracing::debug!(age = request.age, seq = request.ticket.seq(), "stale tree response dropped");
            return Applied::Stale;
        }
        self.tree_requests.settle(request.ticket);

        match result {
            Ok(root) => {
                self.controller.initialize(Some(root));
                self.age = Some(request.age);
                self.popup = None;
                self.member_requests.invalidate();
                Applied::Applied
            }
            Err(err) => {
                tracing::error!(age = request.age, error = %err, "failed to load region tree");
                self.notices.push_back(Notice::new(TREE_LOAD_FAILED));
                Applied::Failed
            }
        }
    }

    /// Act on a child of the current node: open the member popup for a
    /// district, or drill into a region.
    pub fn activate_child(&mut self, child: ChildRef) -> Activation {
        let Ok(id) = self.controller.resolve_child(child) else {
            return Activation::Ignored;
        };
        let Some(tree) = self.controller.tree() else {
            return Activation::Ignored;
        };
        let node = tree.node(id);

        if node.is_district() {
            return match node.member_name.clone() {
                Some(member_name) => Activation::MemberRequested(self.request_member(member_name)),
                None => {
                    self.notices.push_back(Notice::new(NO_MEMBER));
                    Activation::NoMember
                }
            };
        }

        match self.controller.descend(ChildRef::Node(id)) {
            Ok(id) => {
                self.member_requests.invalidate();
                Activation::Descended(id)
            }
            Err(NavigationError::Leaf(name)) => {
                tracing::debug!(region = %name, "region has no sub-regions");
                Activation::Ignored
            }
            Err(err) => {
                tracing::warn!(error = %err, "descend rejected");
                Activation::Ignored
            }
        }
    }

    pub fn request_member(&mut self, member_name: impl Into<String>) -> MemberRequest {
        let ticket = self.member_requests.issue();
        let member_name = member_name.into();
        tracing::debug!(member = %member_name, seq = ticket.seq(), "member summary requested");
        MemberRequest {
            ticket,
            member_name,
            age: self.age.unwrap_or_default(),
        }
    }

    pub fn complete_member<E: fmt::Display>(
        &mut self,
        request: &MemberRequest,
        result: Result<MemberVoteSummary, E>,
    ) -> Applied {
        if !self.member_requests.is_current(request.ticket) {
            tracing::debug!(member = %request.member_name, "stale member response dropped");
            return Applied::Stale;
        }
        self.member_requests.settle(request.ticket);

        match result {
            Ok(summary) => {
                self.controller.select_member(request.member_name.clone());
                self.popup = Some(MemberPopup {
                    title: popup_title(&request.member_name),
                    view: SummaryView::build(&summary),
                    summary,
                });
                Applied::Applied
            }
            Err(err) => {
                tracing::error!(member = %request.member_name, error = %err, "failed to load member summary");
                self.notices.push_back(Notice::new(MEMBER_LOAD_FAILED));
                Applied::Failed
            }
        }
    }

    pub fn ascend(&mut self) -> bool {
        let moved = self.controller.ascend();
        if moved {
            self.member_requests.invalidate();
        }
        moved
    }

    /// Close the popup. The highlighted member stays selected.
    pub fn close_popup(&mut self) -> bool {
        self.popup.take().is_some()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        self.controller.render(surface);
    }
}
