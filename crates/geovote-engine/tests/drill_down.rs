//! Drill-down navigation against the shared fixtures.

use geovote_engine::session::{MEMBER_LOAD_FAILED, NO_MEMBER};
use geovote_engine::{
    Activation, Applied, ChildRef, DrillDownController, Notice, TreemapSession, Viewport,
};
use geovote_testing::assertions::assert_view_invariants;
use geovote_testing::fixtures::{national_tree, sample_summary, seoul_tree};
use geovote_testing::{RecordingSurface, RenderCall};

fn controller(tree: geovote_types::RegionNode) -> DrillDownController {
    let mut controller = DrillDownController::new(Viewport::new(100, 30));
    assert!(controller.initialize(Some(tree)));
    controller
}

#[test]
fn test_descend_into_seoul() {
    let mut controller = controller(seoul_tree());
    controller.descend(ChildRef::Index(0)).unwrap();

    assert_eq!(controller.breadcrumb(), ["서울"]);
    assert!(controller.is_leaf_district_level());

    let mut surface = RecordingSurface::new();
    controller.render(&mut surface);
    assert_eq!(
        surface.last(),
        Some(&RenderCall::CardList {
            cards: vec!["강남구 (지역1 - 당A)".to_string()],
            selection: None,
        })
    );
    assert_eq!(surface.breadcrumb, ["서울"]);
    assert!(surface.back_enabled);
}

#[test]
fn test_root_render_hides_nothing_but_districts() {
    let mut controller = controller(national_tree());
    let mut surface = RecordingSurface::new();
    controller.render(&mut surface);

    assert_eq!(
        surface.last(),
        Some(&RenderCall::Subdivision {
            node: "대한민국".to_string(),
            visible: vec!["서울특별시".to_string(), "세종특별자치시".to_string()],
            viewport: Viewport::new(100, 30),
            highlight: None,
        })
    );
    assert!(!surface.back_enabled);

    controller.descend(ChildRef::Index(0)).unwrap();
    controller.render(&mut surface);
    let Some(RenderCall::Subdivision { visible, .. }) = surface.last() else {
        panic!("expected subdivision, got {:?}", surface.last());
    };
    assert_eq!(visible, &["강남구", "종로구", "빈구"]);
}

#[test]
fn test_invariants_hold_along_a_walk() {
    let mut controller = controller(national_tree());
    let steps = [Some(0), Some(0), None, Some(1), None, None, None, Some(1)];

    for step in steps {
        match step {
            Some(index) => {
                let _ = controller.descend(ChildRef::Index(index));
            }
            None => {
                controller.ascend();
            }
        }
        assert_view_invariants(&controller).unwrap();
    }
}

#[test]
fn test_every_descend_is_undone_by_ascend() {
    let mut controller = controller(national_tree());
    let mut stack = vec![controller.view_state()];

    while controller.descend(ChildRef::Index(0)).is_ok() {
        stack.push(controller.view_state());
    }
    stack.pop();
    while let Some(expected) = stack.pop() {
        assert!(controller.ascend());
        assert_eq!(controller.view_state(), expected);
    }
    assert!(!controller.can_ascend());
}

#[test]
fn test_empty_tree_renders_empty_state() {
    let mut controller = DrillDownController::new(Viewport::new(10, 10));
    controller.initialize(None);

    let mut surface = RecordingSurface::new();
    controller.render(&mut surface);
    assert!(matches!(surface.last(), Some(RenderCall::Empty(_))));
    assert!(surface.breadcrumb.is_empty());
}

#[test]
fn test_session_flow_with_highlight() {
    let mut session = TreemapSession::new(Viewport::new(100, 30));
    let request = session.request_tree(22);
    assert_eq!(
        session.complete_tree::<String>(&request, Ok(national_tree())),
        Applied::Applied
    );

    assert!(matches!(session.activate_child(ChildRef::Index(0)), Activation::Descended(_)));
    assert!(matches!(session.activate_child(ChildRef::Index(0)), Activation::Descended(_)));
    assert_eq!(session.activate_child(ChildRef::Index(2)), Activation::NoMember);
    assert_eq!(session.take_notices(), vec![Notice::new(NO_MEMBER)]);

    let Activation::MemberRequested(request) = session.activate_child(ChildRef::Index(0)) else {
        panic!("expected member request");
    };
    session.complete_member::<String>(&request, Ok(sample_summary()));

    let mut surface = RecordingSurface::new();
    session.render(&mut surface);
    assert_eq!(
        surface.last(),
        Some(&RenderCall::CardList {
            cards: vec![
                "강남구갑\n(홍길동 - 당A)".to_string(),
                "강남구을\n(김철수 - 당B)".to_string(),
                "강남구병 (의원 없음)".to_string(),
            ],
            selection: Some("홍길동".to_string()),
        })
    );
    let popup = session.popup().unwrap();
    assert_eq!(popup.view.cards.len(), 2);
}

#[test]
fn test_failed_member_fetch_is_contained() {
    let mut session = TreemapSession::new(Viewport::new(100, 30));
    let request = session.request_tree(22);
    session.complete_tree::<String>(&request, Ok(seoul_tree()));
    session.activate_child(ChildRef::Index(0));
    let before = session.controller().view_state();

    let Activation::MemberRequested(request) = session.activate_child(ChildRef::Index(0)) else {
        panic!("expected member request");
    };
    let outcome = session.complete_member(&request, Err("timed out"));

    assert_eq!(outcome, Applied::Failed);
    assert_eq!(session.controller().view_state(), before);
    assert_eq!(session.take_notices(), vec![Notice::new(MEMBER_LOAD_FAILED)]);
    assert!(session.popup().is_none());
}
