use async_trait::async_trait;
use resource_actor::{ActorEntity, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Document {
    id: u32,
    title: String,
    published: bool,
}

#[derive(Debug)]
struct DocumentCreate {
    title: String,
}

#[derive(Debug)]
struct DocumentUpdate {
    title: Option<String>,
}

#[derive(Debug)]
enum DocumentAction {
    Publish,
}

#[derive(Debug, thiserror::Error)]
#[error("document error")]
struct DocumentError;

#[async_trait]
impl ActorEntity for Document {
    type Id = u32;
    type Create = DocumentCreate;
    type Update = DocumentUpdate;
    type Action = DocumentAction;
    type ActionResult = bool;
    type Context = ();
    type Error = DocumentError;

    fn from_create_params(id: u32, params: DocumentCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: params.title,
            published: false,
        })
    }

    async fn on_update(
        &mut self,
        update: DocumentUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = title;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DocumentAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            DocumentAction::Publish => {
                if self.published {
                    Ok(false)
                } else {
                    self.published = true;
                    Ok(true)
                }
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client
        .create(DocumentCreate {
            title: "Draft".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Perform Action: Publish
    let changed: bool = client
        .perform_action(id, DocumentAction::Publish)
        .await
        .unwrap();
    assert!(changed);

    // Verify state
    let doc: Document = client.get(id).await.unwrap().unwrap();
    assert!(doc.published);

    // 3. Publish again (should report no change)
    let changed_again: bool = client
        .perform_action(id, DocumentAction::Publish)
        .await
        .unwrap();
    assert!(!changed_again);

    // 4. Update
    let updated = client
        .update(
            id,
            DocumentUpdate {
                title: Some("Final".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Final");

    // 5. Delete
    client.delete(id).await.unwrap();
    let deleted = client.get(id).await.unwrap();
    assert!(deleted.is_none());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let (actor, client) = ResourceActor::<Document>::new(10);
    tokio::spawn(actor.run(()));

    for title in ["first", "second", "third"] {
        client
            .create(DocumentCreate {
                title: title.into(),
            })
            .await
            .unwrap();
    }

    let all = client.list().await.unwrap();
    let titles: Vec<&str> = all.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);

    // Deleting from the middle keeps the remaining order intact
    client.delete(2).await.unwrap();
    let remaining = client.list().await.unwrap();
    let titles: Vec<&str> = remaining.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "third"]);
}

#[tokio::test]
async fn test_operations_on_unknown_ids() {
    let (actor, client) = ResourceActor::<Document>::new(10);
    tokio::spawn(actor.run(()));

    // Get on an unknown id is Ok(None), not an error
    assert!(client.get(99).await.unwrap().is_none());

    // Update, delete and actions report not-found
    assert!(client
        .update(99, DocumentUpdate { title: None })
        .await
        .is_err());
    assert!(client.delete(99).await.is_err());
    assert!(client
        .perform_action(99, DocumentAction::Publish)
        .await
        .is_err());
}
