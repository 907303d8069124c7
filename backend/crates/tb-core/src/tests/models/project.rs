use crate::Project;

#[test]
fn test_project_new() {
    let project = Project::new("Alpha".to_string());

    assert_eq!(project.name, "Alpha");
    assert_eq!(project.created_at, project.updated_at);
}

#[test]
fn test_project_new_assigns_unique_ids() {
    let first = Project::new("Alpha".to_string());
    let second = Project::new("Alpha".to_string());

    assert_ne!(first.id, second.id);
}
