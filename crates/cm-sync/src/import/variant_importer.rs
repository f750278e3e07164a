use cm_client::ManagementApi;
use cm_core::{
    Identifier, ImportContext, LanguageVariant, MigrationError, MigrationItem,
    MigrationItemSchedule, Reference, Result, ScheduleRequest, VariantWorkflowState,
    WorkflowStepChange, WorkflowStepGraph, WorkflowStepKind, WorkflowStepRef,
    map_to_language_variant_upsert,
};

use log::{debug, warn};

/// Writes every version of one migration item into its target language
/// variant and moves the variant through the workflow to the step the
/// version was exported in.
pub(crate) struct VariantImporter<'a> {
    api: &'a dyn ManagementApi,
    context: &'a ImportContext,
    item: &'a MigrationItem,
    item_id: Identifier,
    language_id: Identifier,
    graph: WorkflowStepGraph,
}

impl<'a> VariantImporter<'a> {
    pub(crate) fn new(
        api: &'a dyn ManagementApi,
        context: &'a ImportContext,
        item: &'a MigrationItem,
    ) -> Result<Self> {
        let workflow = context.workflow_by_codename(&item.system.workflow.codename)?;

        Ok(Self {
            api,
            context,
            item,
            item_id: Identifier::Codename(item.system.codename.clone()),
            language_id: Identifier::Codename(item.system.language.codename.clone()),
            graph: WorkflowStepGraph::new(workflow),
        })
    }

    pub(crate) async fn import(&self) -> Result<Vec<LanguageVariant>> {
        if self.item.versions.is_empty() {
            return Err(MigrationError::invalid_value("item has no versions"));
        }

        let mut current = self.prepare_existing_variant().await?;
        let mut imported = Vec::with_capacity(self.item.versions.len());

        for (index, version) in self.item.versions.iter().enumerate() {
            if index > 0 {
                current = self.make_editable(&current).await?;
            }

            let upsert = map_to_language_variant_upsert(self.item, version, self.context)?;
            let variant = self
                .api
                .upsert_language_variant(&self.item_id, &self.language_id, &upsert)
                .await?;

            let target = self
                .graph
                .step_by_codename(&version.workflow_step.codename)?
                .clone();
            self.move_to_step(&current, &target, &version.schedule)
                .await?;

            current = target;
            imported.push(variant);
        }

        Ok(imported)
    }

    /// Step the variant is in once it can be written to. New variants start
    /// in the first step of the workflow.
    async fn prepare_existing_variant(&self) -> Result<WorkflowStepRef> {
        let first_step = self.graph.first_step()?.clone();

        let latest = self
            .context
            .variant_state(&self.item.system.codename, &self.item.system.language.codename)
            .and_then(|state| state.latest());
        let Some(latest) = latest else {
            return Ok(first_step);
        };

        if latest.workflow_codename != self.graph.workflow_codename() {
            debug!(
                "Moving '{}' from workflow '{}' to '{}'",
                self.item.system.codename,
                latest.workflow_codename,
                self.graph.workflow_codename()
            );
            match latest.workflow_state {
                VariantWorkflowState::Published => self.create_new_version().await?,
                VariantWorkflowState::Scheduled => self.cancel_scheduled_publish().await?,
                VariantWorkflowState::Draft | VariantWorkflowState::Archived => {}
            }
            self.change_step(&first_step).await?;
            return Ok(first_step);
        }

        let step = self.graph.step_by_codename(&latest.step_codename)?.clone();
        self.make_editable(&step).await
    }

    async fn make_editable(&self, current: &WorkflowStepRef) -> Result<WorkflowStepRef> {
        let first_step = self.graph.first_step()?.clone();

        match current.kind {
            WorkflowStepKind::Step => return Ok(current.clone()),
            WorkflowStepKind::Published => {
                self.create_new_version().await?;
                return Ok(first_step);
            }
            WorkflowStepKind::Scheduled => self.cancel_scheduled_publish().await?,
            WorkflowStepKind::Archived => {}
        }

        self.change_step(&first_step).await?;
        Ok(first_step)
    }

    async fn move_to_step(
        &self,
        from: &WorkflowStepRef,
        to: &WorkflowStepRef,
        schedule: &MigrationItemSchedule,
    ) -> Result<()> {
        match to.kind {
            WorkflowStepKind::Step => {
                for step in self.graph.shortest_path(from, to)? {
                    self.change_step(&step).await?;
                }
            }
            WorkflowStepKind::Published => {
                self.walk_to_published(from).await?;
                self.api
                    .publish(&self.item_id, &self.language_id, &ScheduleRequest::default())
                    .await?;

                if let Some(unpublish_time) = &schedule.unpublish_time {
                    self.api
                        .unpublish_and_archive(
                            &self.item_id,
                            &self.language_id,
                            &ScheduleRequest {
                                scheduled_to: Some(unpublish_time.clone()),
                                display_timezone: schedule.unpublish_display_timezone.clone(),
                            },
                        )
                        .await?;
                }
            }
            WorkflowStepKind::Scheduled => {
                self.walk_to_published(from).await?;
                if schedule.publish_time.is_none() {
                    warn!(
                        "Scheduled item '{}' has no publish time, publishing it now",
                        self.item.system.codename
                    );
                }
                self.api
                    .publish(
                        &self.item_id,
                        &self.language_id,
                        &ScheduleRequest {
                            scheduled_to: schedule.publish_time.clone(),
                            display_timezone: schedule.publish_display_timezone.clone(),
                        },
                    )
                    .await?;
            }
            // Archiving is allowed from every step.
            WorkflowStepKind::Archived => self.change_step(to).await?,
        }

        Ok(())
    }

    /// Moves through the regular steps that lead to the published step. The
    /// final transition is the publish call itself.
    async fn walk_to_published(&self, from: &WorkflowStepRef) -> Result<()> {
        let path = self.graph.shortest_path(from, self.graph.published_step())?;
        for step in path
            .iter()
            .filter(|step| step.kind == WorkflowStepKind::Step)
        {
            self.change_step(step).await?;
        }
        Ok(())
    }

    async fn change_step(&self, step: &WorkflowStepRef) -> Result<()> {
        debug!(
            "Changing workflow step of '{}' ({}) to '{}'",
            self.item.system.codename, self.item.system.language.codename, step.codename
        );
        self.api
            .change_workflow(
                &self.item_id,
                &self.language_id,
                &WorkflowStepChange {
                    workflow_identifier: Reference::by_codename(self.graph.workflow_codename()),
                    step_identifier: Reference::by_codename(&step.codename),
                },
            )
            .await
    }

    async fn create_new_version(&self) -> Result<()> {
        self.api
            .create_new_version(&self.item_id, &self.language_id)
            .await
    }

    async fn cancel_scheduled_publish(&self) -> Result<()> {
        self.api
            .cancel_scheduled_publish(&self.item_id, &self.language_id)
            .await
    }
}
