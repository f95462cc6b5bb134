//! Given steps for board movement BDD scenarios.

use super::world::{BoardWorld, run_async};
use atelier::board::services::CreateTaskRequest;
use atelier::project::{
    domain::{ClientId, ProjectKind},
    services::CreateProjectRequest,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a blank project named "{name}""#)]
fn blank_project(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let project = run_async(world.setup_service.create_project(CreateProjectRequest::new(
        ClientId::new(),
        name,
        ProjectKind::Web,
    )))
    .wrap_err("create blank project for scenario")?;

    world.project_id = Some(project.id());
    Ok(())
}

#[given(r#"{count:usize} tasks in the "{stage_name}" stage"#)]
fn tasks_in_stage(
    world: &mut BoardWorld,
    count: usize,
    stage_name: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?;
    let stage_id = world.stage_id_by_name(&stage_name)?;

    for index in 0..count {
        let title = format!("Task {}", index.saturating_add(1));
        let created = run_async(world.board_service.create_task(CreateTaskRequest::new(
            project_id, stage_id, title,
        )))
        .wrap_err("create scenario task")?;
        world.created_task_ids.push(created.id());
    }
    Ok(())
}
