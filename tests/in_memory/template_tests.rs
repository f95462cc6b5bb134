//! In-memory integration tests for template-driven project setup.

use super::helpers::{Platform, platform};
use atelier::board::domain::{StageName, TaskPriority, TaskTitle, project_progress};
use atelier::project::{
    domain::{
        ClientId, ProjectKind, Template, TemplateId, TemplateStage, TemplateStageId, TemplateTask,
        TemplateTaskId,
    },
    services::CreateProjectRequest,
};
use rstest::rstest;

fn seed_launch_template(platform: &Platform) -> TemplateId {
    let template_id = TemplateId::new();
    let plan = TemplateStage::new(
        TemplateStageId::new(),
        template_id,
        StageName::new("Plan").expect("valid stage name"),
        0,
    );
    let execute = TemplateStage::new(
        TemplateStageId::new(),
        template_id,
        StageName::new("Execute").expect("valid stage name"),
        1,
    );
    let wrap = TemplateStage::new(
        TemplateStageId::new(),
        template_id,
        StageName::new("Wrap").expect("valid stage name"),
        2,
    );
    let tasks = vec![
        TemplateTask::new(
            TemplateTaskId::new(),
            plan.id(),
            TaskTitle::new("Audience research").expect("valid title"),
            0,
            TaskPriority::High,
        ),
        TemplateTask::new(
            TemplateTaskId::new(),
            execute.id(),
            TaskTitle::new("Asset production").expect("valid title"),
            0,
            TaskPriority::Medium,
        ),
        TemplateTask::new(
            TemplateTaskId::new(),
            wrap.id(),
            TaskTitle::new("Results report").expect("valid title"),
            0,
            TaskPriority::Low,
        ),
    ];
    platform
        .templates
        .seed(
            Template::new(
                template_id,
                StageName::new("Campaign launch").expect("valid stage name"),
                Some("Standard three-phase campaign".to_owned()),
            ),
            vec![plan, execute, wrap],
            tasks,
        )
        .expect("seed template");
    template_id
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cloned_board_is_detached_from_its_template(platform: Platform) {
    let template_id = seed_launch_template(&platform);

    let first = platform
        .setup_service
        .create_project(
            CreateProjectRequest::new(ClientId::new(), "Spring drop", ProjectKind::Campaign)
                .from_template(template_id),
        )
        .await
        .expect("project creation should succeed");
    let second = platform
        .setup_service
        .create_project(
            CreateProjectRequest::new(ClientId::new(), "Summer drop", ProjectKind::Campaign)
                .from_template(template_id),
        )
        .await
        .expect("project creation should succeed");

    let first_board = platform
        .board_service
        .load_board(first.id())
        .await
        .expect("board load should succeed");
    let second_board = platform
        .board_service
        .load_board(second.id())
        .await
        .expect("board load should succeed");

    // Structure matches, identifiers do not: each clone owns its rows.
    assert_eq!(first_board.stages().len(), 3);
    assert_eq!(second_board.stages().len(), 3);
    for (left, right) in first_board.stages().iter().zip(second_board.stages()) {
        assert_eq!(left.name(), right.name());
        assert_ne!(left.id(), right.id());
    }
    assert_eq!(first_board.all_tasks().len(), 3);
    assert_eq!(second_board.all_tasks().len(), 3);

    let cloned_titles: Vec<&str> = first_board
        .all_tasks()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(
        cloned_titles,
        vec!["Audience research", "Asset production", "Results report"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cloned_board_participates_in_metrics(platform: Platform) {
    let template_id = seed_launch_template(&platform);

    let project = platform
        .setup_service
        .create_project(
            CreateProjectRequest::new(ClientId::new(), "Holiday push", ProjectKind::Campaign)
                .from_template(template_id),
        )
        .await
        .expect("project creation should succeed");

    let board = platform
        .board_service
        .load_board(project.id())
        .await
        .expect("board load should succeed");

    // One of three tasks sits in the final stage straight after cloning.
    assert_eq!(project_progress(&board), 33);
    let final_stage = board.stages().last().expect("final stage present");
    let wrap_tasks: Vec<&str> = board
        .tasks_in(final_stage.id())
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(wrap_tasks, vec!["Results report"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_and_templated_projects_share_the_board_service(platform: Platform) {
    let template_id = seed_launch_template(&platform);
    let blank = platform
        .blank_project("Ad-hoc work")
        .await
        .expect("project creation should succeed");
    let templated = platform
        .setup_service
        .create_project(
            CreateProjectRequest::new(ClientId::new(), "Guided work", ProjectKind::Campaign)
                .from_template(template_id),
        )
        .await
        .expect("project creation should succeed");

    let blank_board = platform
        .board_service
        .load_board(blank.id())
        .await
        .expect("board load should succeed");
    let templated_board = platform
        .board_service
        .load_board(templated.id())
        .await
        .expect("board load should succeed");

    let blank_names: Vec<&str> = blank_board
        .stages()
        .iter()
        .map(|stage| stage.name().as_str())
        .collect();
    assert_eq!(blank_names, vec!["To Do", "In Progress", "Done"]);
    assert!(blank_board.all_tasks().is_empty());

    let templated_names: Vec<&str> = templated_board
        .stages()
        .iter()
        .map(|stage| stage.name().as_str())
        .collect();
    assert_eq!(templated_names, vec!["Plan", "Execute", "Wrap"]);
    assert_eq!(templated_board.all_tasks().len(), 3);
}
