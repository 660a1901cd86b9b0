use publisher_core::model::{
    Action, ActionKind, AuthorityTier, ContentItem, ContentKind, Edition, EditionDetails,
    LocalTransactionDetails, Part, TransactionDetails, User, WorkflowState,
};
use publisher_core::ops::local_service_ops;
use publisher_core::Store;
use uuid::Uuid;

/// Author and editor registered in a fresh store
#[allow(dead_code)]
pub struct Fixture {
    pub store: Store,
    pub author: String,
    pub editor: String,
}

#[allow(dead_code)]
pub fn fixture() -> Fixture {
    let mut store = Store::new();
    let author = Uuid::now_v7().to_string();
    let editor = Uuid::now_v7().to_string();
    store.insert_user(User::new(
        author.clone(),
        "Author".to_string(),
        "author@example.com".to_string(),
    ));
    store.insert_user(User::new(
        editor.clone(),
        "Editor".to_string(),
        "editor@example.com".to_string(),
    ));
    Fixture {
        store,
        author,
        editor,
    }
}

/// A MOJ work item with panopticon id 123
#[allow(dead_code)]
pub fn crb_item(kind: ContentKind) -> ContentItem {
    let mut item = ContentItem::new(
        Uuid::now_v7().to_string(),
        "get-a-criminal-records-bureau-check".to_string(),
        kind,
    );
    item.section = Some("work".to_string());
    item.department = Some("MOJ".to_string());
    item.panopticon_id = Some("123".to_string());
    item
}

/// Add an edition to the item's history, bypassing the workflow ops
#[allow(dead_code)]
pub fn attach_edition(store: &mut Store, item: &mut ContentItem, edition: Edition) -> String {
    let id = edition.id.clone();
    item.edition_ids.push(id.clone());
    store.insert_edition(edition);
    id
}

#[allow(dead_code)]
pub fn new_edition(item: &ContentItem, version: u32, title: &str) -> Edition {
    Edition::new(
        Uuid::now_v7().to_string(),
        item.id.clone(),
        version,
        title.to_string(),
        EditionDetails::empty_for(&item.kind),
    )
}

#[allow(dead_code)]
pub fn action(requester: &str, kind: ActionKind) -> Action {
    Action::new(
        Some(requester.to_string()),
        Some("Hello!".to_string()),
        kind,
        WorkflowState::Draft,
    )
}

/// An answer with two editions; the second is assigned to the editor
///
/// Returns the item id
#[allow(dead_code)]
pub fn multi_edition_answer(fx: &mut Fixture) -> String {
    let mut item = crb_item(ContentKind::Answer);

    let mut first = new_edition(&item, 1, "Get a CRB check");
    first.assigned_to = Some(fx.author.clone());
    first.body = "##Your employer will give you a paper application form".to_string();
    first.overview = "Test excerpt".to_string();
    first.alternative_title = "Am I a convicted criminal?".to_string();
    first.record(action(&fx.author, ActionKind::Create));
    attach_edition(&mut fx.store, &mut item, first);

    let mut second = new_edition(&item, 2, "Blah");
    second.assigned_to = Some(fx.editor.clone());
    second.body = "##Your employer will give you a paper application form".to_string();
    second.overview = "Test excerpt 2".to_string();
    second.alternative_title = "Bleh?".to_string();
    second.record(action(&fx.author, ActionKind::Publish));
    attach_edition(&mut fx.store, &mut item, second);

    let id = item.id.clone();
    fx.store.insert_content_item(item);
    id
}

/// A guide whose only edition has two parts
#[allow(dead_code)]
pub fn sample_guide(fx: &mut Fixture) -> String {
    let mut item = crb_item(ContentKind::Guide);

    let mut edition = new_edition(&item, 1, "Get a CRB check");
    edition.assigned_to = Some(fx.author.clone());
    if let Some(guide) = edition.guide_mut() {
        guide.add_part(Part::new("my TITLE", "my-title", "This is part 1", 1));
        guide.add_part(Part::new("my OTHER TITLE", "my-other-title", "This is part 2", 2));
    }
    attach_edition(&mut fx.store, &mut item, edition);

    let id = item.id.clone();
    fx.store.insert_content_item(item);
    id
}

/// A transaction whose only edition has every transaction field filled in
#[allow(dead_code)]
pub fn sample_transaction(fx: &mut Fixture) -> String {
    let mut item = crb_item(ContentKind::Transaction);

    let mut edition = new_edition(&item, 1, "Get a CRB check");
    edition.assigned_to = Some(fx.author.clone());
    edition.details = EditionDetails::Transaction(TransactionDetails {
        introduction: "Some form of intro".to_string(),
        will_continue_on: "a website".to_string(),
        link: "http://a.web.site/".to_string(),
        more_information: "This is not real".to_string(),
        alternate_method: "Blah blah".to_string(),
        expectation_ids: Vec::new(),
    });
    edition.record(action(&fx.author, ActionKind::Create));
    attach_edition(&mut fx.store, &mut item, edition);

    let id = item.id.clone();
    fx.store.insert_content_item(item);
    id
}

/// A local transaction for LGSL `lgsl_code` whose edition carries no code of its own
#[allow(dead_code)]
pub fn sample_local_transaction(fx: &mut Fixture, lgsl_code: u32) -> String {
    let mut item = ContentItem::new(
        Uuid::now_v7().to_string(),
        "slug".to_string(),
        ContentKind::LocalTransaction { lgsl_code },
    );
    item.name = "Local Transaction".to_string();
    item.panopticon_id = Some("1243".to_string());

    let mut edition = new_edition(&item, 1, "A local transaction");
    edition.details = EditionDetails::LocalTransaction(LocalTransactionDetails {
        lgsl_code: None,
        introduction: "Something local".to_string(),
        more_information: String::new(),
    });
    attach_edition(&mut fx.store, &mut item, edition);

    let id = item.id.clone();
    fx.store.insert_content_item(item);
    id
}

#[allow(dead_code)]
pub fn make_authority(store: &mut Store, tier: AuthorityTier, snac: &str, lgsl: u32) -> String {
    local_service_ops::create_local_authority(
        store,
        format!("Authority {}", snac),
        snac.to_string(),
        tier,
        [lgsl],
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn make_service(store: &mut Store, lgsl: u32, tiers: &[AuthorityTier]) {
    local_service_ops::create_local_service(
        store,
        lgsl,
        format!("Service {}", lgsl),
        tiers.iter().copied(),
    )
    .unwrap();
}

/// The item and its latest edition, cloned out of the store
#[allow(dead_code)]
pub fn item_and_latest(store: &Store, item_id: &str) -> (ContentItem, Edition) {
    let item = store.get_content_item(item_id).unwrap().clone();
    let latest = publisher_core::ops::latest_edition(store, &item)
        .unwrap()
        .clone();
    (item, latest)
}
