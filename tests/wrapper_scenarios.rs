use editable_webdata::prelude::*;

fn set_current(value: &str) -> impl FnOnce(Editable<String>) -> Editable<String> + '_ {
    move |e| e.update(value.to_string())
}

#[test]
fn test_create_yields_read_only_and_not_asked() {
    let w = EditableWebData::create("old".to_string());
    assert_eq!(w.clone().to_editable(), Editable::ReadOnly("old".to_string()));
    assert_eq!(w.to_status(), RemoteStatus::NotAsked);
}

#[test]
fn test_enter_edit_and_set_current() {
    let w = EditableWebData::create("old".to_string())
        .map_editable(Editable::edit)
        .map_editable(set_current("new"));
    assert_eq!(
        w.to_editable(),
        Editable::Editing {
            original: "old".to_string(),
            current: "new".to_string(),
        }
    );
}

#[test]
fn test_loading_keeps_editable_read_only() {
    let w = EditableWebData::create("new".to_string()).update_status(RemoteStatus::Loading);
    assert_eq!(w.status(), &RemoteStatus::Loading);
    assert_eq!(w.to_editable(), Editable::ReadOnly("new".to_string()));
}

#[test]
fn test_success_with_unit_payload() {
    let w = EditableWebData::create("new".to_string()).update_status(RemoteStatus::Success(()));
    assert_eq!(w.to_status(), RemoteStatus::Success(()));
}

#[test]
fn test_loading_then_success_sequence() {
    let w = EditableWebData::create("new".to_string())
        .update_status(RemoteStatus::Loading)
        .update_status(RemoteStatus::Success(()));
    assert_eq!(w.to_status(), RemoteStatus::Success(()));
}

#[test]
fn test_failure_is_plain_data() {
    let w = EditableWebData::create("new".to_string())
        .map_editable(Editable::edit)
        .update_status(RemoteStatus::Failure(WebDataError::BadStatus(409)));
    match w.status() {
        RemoteStatus::Failure(err) => {
            assert_eq!(err.to_string(), "server responded with status 409");
        }
        other => panic!("expected failure, got {other}"),
    }
    assert!(w.editable().is_editing());
}

#[test]
fn test_generic_payload_wrapper() {
    // A save that returns the server-assigned revision
    let w: EditableWebDataWrapper<String, u64> = EditableWebDataWrapper::create("draft".to_string())
        .update_status(RemoteStatus::Success(7));
    assert_eq!(w.status().success(), Some(&7));
}
