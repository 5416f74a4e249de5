//! Tests for ItemService

use std::sync::Arc;

use cabinet::application::error::ApplicationError;
use cabinet::infrastructure::traits::{MemoryNodeStore, NodeStore};
use cabinet::{CreateItem, DomainError, ItemService, NodeId, NodeKind};

fn service() -> (Arc<MemoryNodeStore>, ItemService) {
    let store = Arc::new(MemoryNodeStore::new());
    let service = ItemService::new(store.clone());
    (store, service)
}

fn create(
    service: &ItemService,
    name: &str,
    kind: NodeKind,
    parent_id: Option<NodeId>,
) -> cabinet::Node {
    service
        .create(CreateItem {
            name: name.to_string(),
            kind,
            parent_id,
            content: None,
        })
        .expect("create item")
}

#[test]
fn given_created_hierarchy_when_listing_all_then_forest_covers_every_item() {
    // Arrange
    let (_, service) = service();
    let root = create(&service, "docs", NodeKind::Folder, None);
    let sub = create(&service, "notes", NodeKind::Folder, Some(root.id));
    let _file = create(&service, "todo.txt", NodeKind::File, Some(sub.id));
    let _other_root = create(&service, "readme", NodeKind::File, None);

    // Act
    let forest = service.list_all().unwrap();

    // Assert - two roots, folder first, all four nodes present
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].node.id, root.id);
    let total: usize = forest.iter().map(|t| t.len()).sum();
    assert_eq!(total, 4);
}

#[test]
fn given_folder_with_children_when_listing_children_then_flat_and_ordered() {
    // Arrange
    let (_, service) = service();
    let root = create(&service, "docs", NodeKind::Folder, None);
    let sub = create(&service, "drafts", NodeKind::Folder, Some(root.id));
    create(&service, "banana", NodeKind::File, Some(root.id));
    create(&service, "fig", NodeKind::File, Some(root.id));
    // grandchild must not show up in the children listing
    create(&service, "nested", NodeKind::File, Some(sub.id));

    // Act
    let children = service.list_children(&root.id).unwrap();

    // Assert - folder first, then files shortest-name first; no recursion
    let names: Vec<&str> = children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["drafts", "fig", "banana"]);
}

#[test]
fn given_unknown_folder_id_when_listing_children_then_empty_not_error() {
    // Arrange
    let (_, service) = service();

    // Act
    let children = service.list_children(&NodeId::new()).unwrap();

    // Assert - existence is deliberately not validated
    assert!(children.is_empty());
}

#[test]
fn given_file_when_reading_content_then_returns_text() {
    // Arrange
    let (_, service) = service();
    let file = service
        .create(CreateItem {
            name: "todo.txt".to_string(),
            kind: NodeKind::File,
            parent_id: None,
            content: Some("buy milk".to_string()),
        })
        .unwrap();

    // Act
    let content = service.file_content(&file.id).unwrap();

    // Assert
    assert_eq!(content, "buy milk");
}

#[test]
fn given_folder_id_when_reading_content_then_not_found() {
    // Arrange
    let (_, service) = service();
    let folder = create(&service, "docs", NodeKind::Folder, None);

    // Act
    let result = service.file_content(&folder.id);

    // Assert - wrong kind counts as not-found
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn given_unknown_id_when_reading_content_then_not_found() {
    let (_, service) = service();
    assert!(service.file_content(&NodeId::new()).unwrap_err().is_not_found());
}

#[test]
fn given_file_without_content_when_creating_then_defaults_to_empty_string() {
    // Arrange
    let (_, service) = service();

    // Act
    let file = create(&service, "empty.txt", NodeKind::File, None);

    // Assert
    assert_eq!(file.content.as_deref(), Some(""));
}

#[test]
fn given_folder_with_content_when_creating_then_content_is_dropped() {
    // Arrange
    let (_, service) = service();

    // Act
    let folder = service
        .create(CreateItem {
            name: "docs".to_string(),
            kind: NodeKind::Folder,
            parent_id: None,
            content: Some("ignored".to_string()),
        })
        .unwrap();

    // Assert
    assert!(folder.content.is_none());
}

#[test]
fn given_unknown_parent_when_creating_then_not_found_and_nothing_persisted() {
    // Arrange
    let (store, service) = service();

    // Act
    let result = service.create(CreateItem {
        name: "lost".to_string(),
        kind: NodeKind::File,
        parent_id: Some(NodeId::new()),
        content: None,
    });

    // Assert - no partial write
    assert!(result.unwrap_err().is_not_found());
    assert!(store.fetch_all().unwrap().is_empty());
}

#[test]
fn given_empty_name_when_creating_then_invalid_argument() {
    // Arrange
    let (_, service) = service();

    // Act
    let result = service.create(CreateItem {
        name: String::new(),
        kind: NodeKind::File,
        parent_id: None,
        content: None,
    });

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        ApplicationError::Domain(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn given_file_when_updating_content_then_overwritten() {
    // Arrange
    let (_, service) = service();
    let file = create(&service, "todo.txt", NodeKind::File, None);

    // Act
    let updated = service.update_content(&file.id, "new text").unwrap();

    // Assert - content replaced, everything else untouched
    assert_eq!(updated.content.as_deref(), Some("new text"));
    assert_eq!(updated.name, file.name);
    assert_eq!(updated.kind, file.kind);
    assert_eq!(service.file_content(&file.id).unwrap(), "new text");
}

#[test]
fn given_folder_when_updating_content_then_not_found() {
    let (_, service) = service();
    let folder = create(&service, "docs", NodeKind::Folder, None);
    assert!(service
        .update_content(&folder.id, "nope")
        .unwrap_err()
        .is_not_found());
}

#[test]
fn given_item_when_renaming_then_name_only_changes() {
    // Arrange
    let (_, service) = service();
    let file = create(&service, "old.txt", NodeKind::File, None);

    // Act
    let renamed = service.rename(&file.id, "new.txt").unwrap();

    // Assert
    assert_eq!(renamed.name, "new.txt");
    assert_eq!(renamed.id, file.id);
    assert_eq!(renamed.parent_id, file.parent_id);
    assert_eq!(renamed.content, file.content);
}

#[test]
fn given_unknown_id_when_renaming_then_not_found() {
    let (_, service) = service();
    assert!(service
        .rename(&NodeId::new(), "name")
        .unwrap_err()
        .is_not_found());
}

#[test]
fn given_empty_name_when_renaming_then_invalid_argument() {
    let (_, service) = service();
    let file = create(&service, "a.txt", NodeKind::File, None);
    assert!(matches!(
        service.rename(&file.id, "").unwrap_err(),
        ApplicationError::Domain(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn given_folder_with_descendants_when_deleting_then_subtree_removed() {
    // Arrange
    let (store, service) = service();
    let root = create(&service, "docs", NodeKind::Folder, None);
    let sub = create(&service, "notes", NodeKind::Folder, Some(root.id));
    let leaf = create(&service, "todo.txt", NodeKind::File, Some(sub.id));
    let survivor = create(&service, "keep.txt", NodeKind::File, None);

    // Act
    service.delete(&root.id).unwrap();

    // Assert - no former descendant id remains
    let remaining = store.fetch_all().unwrap();
    let ids: Vec<NodeId> = remaining.iter().map(|n| n.id).collect();
    assert!(!ids.contains(&root.id));
    assert!(!ids.contains(&sub.id));
    assert!(!ids.contains(&leaf.id));
    assert_eq!(ids, vec![survivor.id]);
}

#[test]
fn given_unknown_id_when_deleting_then_noop_success() {
    let (_, service) = service();
    assert!(service.delete(&NodeId::new()).is_ok());
}

#[test]
fn given_empty_query_when_searching_then_invalid_argument() {
    // Arrange
    let (_, service) = service();
    create(&service, "anything", NodeKind::File, None);

    // Act
    let result = service.search("");

    // Assert - never treated as match-everything
    assert!(matches!(
        result.unwrap_err(),
        ApplicationError::Domain(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn given_spec_example_when_searching_then_length_then_alpha_ordering() {
    // Arrange - nodes: note.txt, Notes, other (all files)
    let (_, service) = service();
    create(&service, "note.txt", NodeKind::File, None);
    create(&service, "Notes", NodeKind::File, None);
    create(&service, "other", NodeKind::File, None);

    // Act
    let hits = service.search("not").unwrap();

    // Assert - match is case-insensitive; shorter name first
    let names: Vec<&str> = hits.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Notes", "note.txt"]);
}

#[test]
fn given_mixed_kinds_when_searching_then_folders_precede_files() {
    // Arrange
    let (_, service) = service();
    create(&service, "report.txt", NodeKind::File, None);
    let folder = create(&service, "reports-archive", NodeKind::Folder, None);

    // Act
    let hits = service.search("report").unwrap();

    // Assert - folder first despite longer name
    assert_eq!(hits[0].id, folder.id);
    assert_eq!(hits.len(), 2);
}

#[test]
fn given_nested_match_when_searching_then_result_is_flat() {
    // Arrange - matching folder has a matching child
    let (_, service) = service();
    let folder = create(&service, "music", NodeKind::Folder, None);
    create(&service, "music-list", NodeKind::File, Some(folder.id));

    // Act
    let hits = service.search("music").unwrap();

    // Assert - both returned as flat rows, parent link untouched
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1].parent_id, Some(folder.id));
}
