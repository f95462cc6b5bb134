//! When steps for project setup BDD scenarios.

use super::world::{SetupWorld, run_async};
use atelier::project::{
    domain::{ProjectKind, TemplateId},
    services::CreateProjectRequest,
};
use rstest_bdd_macros::when;

#[when(r#"a project named "{name}" is created without a template"#)]
fn create_blank_project(world: &mut SetupWorld, name: String) {
    let request = CreateProjectRequest::new(world.client_id, name, ProjectKind::Retainer);
    world.last_result = Some(run_async(world.service.create_project(request)));
}

#[when(r#"a project named "{name}" is created from the template"#)]
fn create_templated_project(world: &mut SetupWorld, name: String) -> Result<(), eyre::Report> {
    let template_id = world
        .template_id
        .ok_or_else(|| eyre::eyre!("missing template in scenario world"))?;
    let request = CreateProjectRequest::new(world.client_id, name, ProjectKind::Content)
        .from_template(template_id);
    world.last_result = Some(run_async(world.service.create_project(request)));
    Ok(())
}

#[when(r#"a project named "{name}" is created from an unknown template"#)]
fn create_project_from_unknown_template(world: &mut SetupWorld, name: String) {
    let request = CreateProjectRequest::new(world.client_id, name, ProjectKind::Branding)
        .from_template(TemplateId::new());
    world.last_result = Some(run_async(world.service.create_project(request)));
}
