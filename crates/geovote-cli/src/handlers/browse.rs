//! `geovote browse`: interactive treemap drill-down.
//!
//! Fetches run on a tokio runtime and report back over a std channel; the
//! UI thread applies them in arrival order through [`TreemapSession`],
//! which drops anything superseded in the meantime.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use crossterm::event::{KeyCode, KeyEvent};
use geovote_client::{ApiClient, ClientError, Config};
use geovote_engine::{
    Activation, Applied, ChildRef, Debouncer, MemberRequest, TreeRequest, TreemapSession, Viewport,
};
use geovote_types::{MemberVoteSummary, RegionNode};
use is_terminal::IsTerminal;
use tokio::runtime::Handle;

use crate::presentation::tui::{
    PopupViewModel, ScreenViewModel, TuiApp, TuiRenderer, TuiSurface, body_viewport,
};

const LOG_CAPACITY: usize = 50;
const NOTICE_TTL: Duration = Duration::from_secs(4);

pub enum FetchResult {
    Tree(TreeRequest, Result<RegionNode, ClientError>),
    Member(MemberRequest, Result<MemberVoteSummary, ClientError>),
}

/// Starts fetches; results come back as [`FetchResult`]s.
pub trait Fetcher {
    fn fetch_tree(&self, request: TreeRequest);
    fn fetch_member(&self, request: MemberRequest);
}

pub struct ClientFetcher {
    client: Arc<ApiClient>,
    runtime: Handle,
    results: Sender<FetchResult>,
}

impl ClientFetcher {
    pub fn new(client: ApiClient, runtime: Handle, results: Sender<FetchResult>) -> Self {
        Self {
            client: Arc::new(client),
            runtime,
            results,
        }
    }
}

impl Fetcher for ClientFetcher {
    fn fetch_tree(&self, request: TreeRequest) {
        let client = Arc::clone(&self.client);
        let results = self.results.clone();
        self.runtime.spawn(async move {
            let result = client.fetch_tree(request.age).await;
            let _ = results.send(FetchResult::Tree(request, result));
        });
    }

    fn fetch_member(&self, request: MemberRequest) {
        let client = Arc::clone(&self.client);
        let results = self.results.clone();
        self.runtime.spawn(async move {
            let result = client
                .fetch_member_summary(&request.member_name, request.age)
                .await;
            let _ = results.send(FetchResult::Member(request, result));
        });
    }
}

pub fn handle(config: &Config, age: u32, logs: Receiver<String>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; try `geovote member` or `geovote dashboard`");
    }

    let runtime = super::runtime()?;
    let client = ApiClient::from_config(config)?;
    let (tx, rx) = mpsc::channel();
    let fetcher = ClientFetcher::new(client, runtime.handle().clone(), tx);

    let (width, height) = crossterm::terminal::size()?;
    let mut app = BrowseApp::new(config, age, fetcher, rx, body_viewport(width, height))
        .with_logs(logs);
    TuiRenderer::run(&mut app)
}

pub struct BrowseApp<F> {
    session: TreemapSession,
    surface: TuiSurface,
    fetcher: F,
    results: Receiver<FetchResult>,
    logs: Option<Receiver<String>>,
    log_lines: VecDeque<String>,
    resize: Debouncer<Viewport>,
    config: Config,
    /// Term of the most recent tree request.
    requested_age: u32,
    focus: usize,
    notice: Option<(String, Instant)>,
    should_quit: bool,
}

impl<F: Fetcher> BrowseApp<F> {
    pub fn new(
        config: &Config,
        age: u32,
        fetcher: F,
        results: Receiver<FetchResult>,
        viewport: Viewport,
    ) -> Self {
        let mut app = Self {
            session: TreemapSession::new(viewport),
            surface: TuiSurface::new(),
            fetcher,
            results,
            logs: None,
            log_lines: VecDeque::new(),
            resize: Debouncer::new(config.resize_debounce()),
            config: config.clone(),
            requested_age: age,
            focus: 0,
            notice: None,
            should_quit: false,
        };
        app.load_tree(age);
        app
    }

    pub fn with_logs(mut self, logs: Receiver<String>) -> Self {
        self.logs = Some(logs);
        self
    }

    #[cfg(test)]
    pub fn session(&self) -> &TreemapSession {
        &self.session
    }

    fn load_tree(&mut self, age: u32) {
        let request = self.session.request_tree(age);
        self.requested_age = age;
        self.fetcher.fetch_tree(request);
    }

    fn refresh(&mut self) {
        self.session.render(&mut self.surface);
        let count = self.surface.body.item_count();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }

    fn move_focus(&mut self, step: isize) {
        let count = self.surface.body.item_count();
        if count == 0 {
            return;
        }
        self.focus = self
            .focus
            .saturating_add_signed(step)
            .min(count - 1);
    }

    fn activate(&mut self) {
        let Some(id) = self.surface.node_at(self.focus) else {
            return;
        };
        match self.session.activate_child(ChildRef::Node(id)) {
            Activation::Descended(_) => {
                self.focus = 0;
                self.refresh();
            }
            Activation::MemberRequested(request) => self.fetcher.fetch_member(request),
            Activation::NoMember | Activation::Ignored => {}
        }
    }

    fn ascend(&mut self) {
        let from = self.session.controller().current();
        if self.session.ascend() {
            self.refresh();
            self.focus = from
                .and_then(|id| self.surface.nodes.iter().position(|n| *n == id))
                .unwrap_or(0);
        }
    }

    fn switch_age(&mut self, step: isize) {
        let current = self.session.age().unwrap_or(self.requested_age);
        match self.config.adjacent_age(current, step) {
            Some(age) => self.load_tree(age),
            None => tracing::debug!(current, step, "no adjacent term"),
        }
    }

    fn apply(&mut self, result: FetchResult) {
        match result {
            FetchResult::Tree(request, result) => {
                let outcome = self.session.complete_tree(&request, result);
                if outcome != Applied::Stale {
                    if outcome == Applied::Applied {
                        self.focus = 0;
                        tracing::info!(age = request.age, "region tree loaded");
                    }
                    self.refresh();
                }
            }
            FetchResult::Member(request, result) => {
                if self.session.complete_member(&request, result) != Applied::Stale {
                    self.refresh();
                }
            }
        }
    }
}

impl<F: Fetcher> TuiApp for BrowseApp<F> {
    fn handle_key(&mut self, key: KeyEvent) {
        if self.session.popup().is_some() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                    self.session.close_popup();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.move_focus(-1)
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.move_focus(1)
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace | KeyCode::Char('b') => self.ascend(),
            KeyCode::Char('[') => self.switch_age(-1),
            KeyCode::Char(']') => self.switch_age(1),
            _ => {}
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.resize.trigger(now, body_viewport(width, height));
    }

    fn tick(&mut self, now: Instant) {
        while let Ok(result) = self.results.try_recv() {
            self.apply(result);
        }

        if let Some(viewport) = self.resize.poll(now) {
            tracing::debug!(width = viewport.width, height = viewport.height, "re-layout");
            self.session.set_viewport(viewport);
            self.refresh();
        }

        if let Some(notice) = self.session.take_notices().pop() {
            self.notice = Some((notice.message, now));
        }
        if self
            .notice
            .as_ref()
            .is_some_and(|(_, at)| now.duration_since(*at) >= NOTICE_TTL)
        {
            self.notice = None;
        }

        if let Some(logs) = &self.logs {
            for line in logs.try_iter() {
                if self.log_lines.len() == LOG_CAPACITY {
                    self.log_lines.pop_front();
                }
                self.log_lines.push_back(line);
            }
        }
    }

    fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.resize.time_until_due(now)
    }

    fn screen(&self) -> ScreenViewModel {
        let count = self.surface.body.item_count();
        ScreenViewModel {
            breadcrumb: self.surface.breadcrumb.clone(),
            back_enabled: self.surface.back_enabled,
            age: self.session.age(),
            body: self.surface.body.clone(),
            focus: count.checked_sub(1).map(|last| self.focus.min(last)),
            popup: self.session.popup().map(|popup| PopupViewModel {
                title: popup.title.clone(),
                lines: popup.view.to_lines(),
            }),
            notice: self.notice.as_ref().map(|(message, _)| message.clone()),
            loading: self.session.tree_pending() || self.session.member_pending(),
            logs: self.log_lines.iter().cloned().collect(),
        }
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}
