//! Given steps for project setup BDD scenarios.

use super::world::{SetupWorld, run_async};
use atelier::board::domain::{StageName, TaskPriority, TaskTitle};
use atelier::project::{
    domain::{Template, TemplateId, TemplateStage, TemplateStageId, TemplateTask, TemplateTaskId},
    ports::TemplateRepository,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a workflow template with stages "{first}" and "{second}""#)]
fn template_with_stages(
    world: &mut SetupWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let template_id = TemplateId::new();
    let stages = vec![
        TemplateStage::new(
            TemplateStageId::new(),
            template_id,
            StageName::new(first).wrap_err("first stage name")?,
            0,
        ),
        TemplateStage::new(
            TemplateStageId::new(),
            template_id,
            StageName::new(second).wrap_err("second stage name")?,
            1,
        ),
    ];
    world
        .templates
        .seed(
            Template::new(
                template_id,
                StageName::new("Scenario template").wrap_err("template name")?,
                None,
            ),
            stages,
            Vec::new(),
        )
        .wrap_err("seed scenario template")?;

    world.template_id = Some(template_id);
    Ok(())
}

#[given(r#"the template stage "{stage_name}" holds the tasks "{first}" and "{second}""#)]
fn template_stage_with_tasks(
    world: &mut SetupWorld,
    stage_name: String,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let template_id = world
        .template_id
        .ok_or_else(|| eyre::eyre!("missing template in scenario world"))?;
    let stages = run_async(world.templates.list_stages(template_id))
        .map_err(|err| eyre::eyre!("stage listing failed: {err}"))?;
    let stage = stages
        .iter()
        .find(|stage| stage.name().as_str() == stage_name)
        .ok_or_else(|| eyre::eyre!("template stage {stage_name:?} not seeded"))?;

    let tasks = vec![
        TemplateTask::new(
            TemplateTaskId::new(),
            stage.id(),
            TaskTitle::new(first).wrap_err("first task title")?,
            0,
            TaskPriority::High,
        ),
        TemplateTask::new(
            TemplateTaskId::new(),
            stage.id(),
            TaskTitle::new(second).wrap_err("second task title")?,
            1,
            TaskPriority::Medium,
        ),
    ];
    world
        .templates
        .seed(
            Template::new(
                template_id,
                StageName::new("Scenario template").wrap_err("template name")?,
                None,
            ),
            Vec::new(),
            tasks,
        )
        .wrap_err("seed scenario template tasks")?;
    Ok(())
}
