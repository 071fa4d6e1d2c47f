use std::cell::RefCell;
use std::rc::Rc;

use shelfapp::api::ShelfApi;
use shelfapp::clients::flashcard::TagStore;
use shelfapp::config::ShelfConfig;
use shelfapp::error::ShelfError;
use shelfapp::model::{NewSource, NewTag};
use shelfapp::routes::{LoadError, Params};
use shelfapp::sample::Sampler;
use shelfapp::store::EmptySeed;

fn setup() -> ShelfApi {
    ShelfApi::new(ShelfConfig {
        seed: Some(2024),
        sample_count: 4,
        samples: true,
    })
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_empty_tag_store_add_then_remove() {
    let tags = TagStore::new(&mut EmptySeed, Rc::new(RefCell::new(Sampler::new(None))));

    let tag = tags.add(NewTag::new("x"));
    let snapshot = tags.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "x");
    assert_eq!(snapshot[0].id, tag.id);

    assert!(tags.remove(&tag.id));
    assert!(tags.snapshot().is_empty());
}

#[test]
fn test_loader_bad_request_not_found_and_found() {
    let api = setup();

    let err = api.load_source(&params(&[])).unwrap_err();
    assert!(matches!(err, ShelfError::Load(LoadError::BadRequest(_))));

    let err = api.load_source(&params(&[("id", "missing")])).unwrap_err();
    match err {
        ShelfError::Load(e) => assert_eq!(e.status(), 404),
        other => panic!("expected a load error, got {other:?}"),
    }

    let added = api.add_source(NewSource::new("The Art of Computer Programming"));
    let page = api
        .load_source(&params(&[("id", added.id.to_string().as_str())]))
        .unwrap();
    assert_eq!(page.source, added);
}

#[test]
fn test_observer_follows_session_changes() {
    let api = setup();
    let lengths = Rc::new(RefCell::new(Vec::new()));

    let seen = Rc::clone(&lengths);
    let sub = api
        .sources()
        .subscribe(move |snapshot| seen.borrow_mut().push(snapshot.len()));

    let added = api.add_source(NewSource::new("SICP"));
    api.remove_source(&added.id.to_string()).unwrap();
    // unknown id: no notification
    api.remove_source(&added.id.to_string()).unwrap();

    sub.unsubscribe();
    api.add_source(NewSource::new("After unsubscribe"));

    assert_eq!(*lengths.borrow(), vec![4, 5, 4]);
}

#[test]
fn test_snapshot_survives_later_mutations() {
    let api = setup();
    let before = api.list_tags();

    let first = before[0].clone();
    api.remove_tag(&first.id.to_string()).unwrap();
    api.add_tag(NewTag::new("new"));

    assert_eq!(before.len(), 4);
    assert_eq!(before[0], first);
    assert_eq!(api.list_tags().len(), 4);
    assert!(api.list_tags().iter().all(|t| t.id != first.id));
}

#[test]
fn test_source_tags_are_free_text() {
    let api = setup();
    let source = api.list_sources()[0].clone();

    let edited = api
        .edit_source(
            &source.id.to_string(),
            shelfapp::api::SourceEdit {
                tags: Some(vec!["not-a-registered-tag".to_string()]),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(edited.tags, vec!["not-a-registered-tag"]);
    assert!(api
        .list_tags()
        .iter()
        .all(|t| t.name != "not-a-registered-tag"));
}
