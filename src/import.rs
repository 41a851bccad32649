//! The generic per-entity importer.
//!
//! One importer serves every entity kind; the per-entity differences (table
//! name, attribute mapping, optional denormalization write) live in the
//! [`Entity`] descriptors in [`entities`]. Records are processed strictly in
//! input order, one write at a time, and the first failed write aborts the
//! batch.

/// [`Entity`] implementations for the importable record types.
pub mod entities;

use crate::{attr, config::RunConfig, error::Error, expr, model, sequence};
use expr::condition::{Condition, ConditionList};
use expr::update::Update;

use aws_sdk_dynamodb::Client;
use serde::de::DeserializeOwned;
use std::fmt;

/// Key attribute of every entity table.
const ID_ATTRIBUTE: &str = "Id";

/// Options shared by the import subcommands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ImportOptions {
    /// Allow overwriting records that already exist. Without this, a write
    /// to an existing id fails and aborts the batch.
    pub allow_update: bool,
    /// Only recompute the id sequence; skip all entity writes.
    pub id_sequence_only: bool,
    /// Resistances only: clear the denormalized `Ingredients` set on each
    /// imported record.
    pub clear_ingredients: bool,
}

/// A secondary write maintaining a denormalized reverse reference on a
/// related record. Its failure aborts the batch like any other write.
#[derive(Clone, Debug, PartialEq)]
pub struct FollowUp {
    /// Table suffix of the related entity.
    pub table_suffix: &'static str,
    /// Id of the related record.
    pub id: i64,
    /// The update to apply to it.
    pub update: Update,
}

/// Per-entity import descriptor.
///
/// Implementations provide the table name suffix, the record key, and the
/// update expression writing the record's attributes; entities with a
/// denormalized relationship also provide a follow-up write. The `Default`
/// bound lets a [`model::Response`] around the entity decode with absent
/// fields.
pub trait Entity: DeserializeOwned + fmt::Debug + Default {
    /// Table name suffix, appended to the resolved table prefix. Also used
    /// to derive the entity's sequence name.
    const TABLE_SUFFIX: &'static str;

    /// The record's externally assigned id.
    fn id(&self) -> i64;

    /// The upsert expression for this record. Optional fields that are empty
    /// are cleared rather than written as empty strings.
    fn update(&self, options: &ImportOptions) -> Update;

    /// An optional secondary write against a related record.
    fn follow_up(&self, options: &ImportOptions) -> Option<FollowUp> {
        let _ = options;
        None
    }
}

/// The highest id in a batch; 0 for an empty batch.
pub(crate) fn highest_id<E: Entity>(records: &[E]) -> i64 {
    records.iter().fold(0, |highest, record| highest.max(record.id()))
}

/// The sequence candidate for a batch: one past the highest id, saturating
/// so a record at `i64::MAX` cannot overflow the counter.
pub(crate) fn next_sequence_id<E: Entity>(records: &[E]) -> i64 {
    highest_id(records).saturating_add(1)
}

/// Imports one decoded batch of records.
pub struct Importer<'a> {
    client: &'a Client,
    config: &'a RunConfig,
}

impl<'a> Importer<'a> {
    /// Build an importer over a client and run configuration.
    pub fn new(client: &'a Client, config: &'a RunConfig) -> Self {
        Self { client, config }
    }

    /// Import a batch and advance the entity's id sequence.
    ///
    /// Records are written in input order; the first failure aborts the rest
    /// of the batch. After the batch, the sequence is advanced to
    /// `highest id + 1` through the optimistic update in [`sequence`].
    pub async fn run<E: Entity>(
        &self,
        batch: model::Response<E>,
        options: &ImportOptions,
    ) -> Result<sequence::SequenceOutcome, Error> {
        let table_name = self.config.table_name(E::TABLE_SUFFIX);
        for record in &batch.data {
            println!("{record:?}");
            if options.id_sequence_only {
                continue;
            }
            self.write_record(&table_name, record, options).await?;
            if let Some(follow_up) = record.follow_up(options) {
                self.write_follow_up(follow_up).await?;
            }
        }
        let update = sequence::SequenceUpdate {
            sequence_name: self.config.sequence_name(E::TABLE_SUFFIX),
            next_id: next_sequence_id(&batch.data),
        };
        update.send(self.client, &self.config.sequences_table()).await
    }

    async fn write_record<E: Entity>(
        &self,
        table_name: &str,
        record: &E,
        options: &ImportOptions,
    ) -> Result<(), Error> {
        let mut names = None;
        let mut values = None;
        let update_expression =
            expr::ExpressionInput::from(record.update(options)).merge_into(&mut names, &mut values);
        let condition_expression = if options.allow_update {
            None
        } else {
            let guard = ConditionList::single(ID_ATTRIBUTE, Condition::<i64>::Null);
            Some(expr::ExpressionInput::try_from(guard)?.merge_into(&mut names, &mut values))
        };
        tracing::debug!(table_name, id = record.id(), "writing record");
        self.client
            .update_item()
            .table_name(table_name)
            .key(ID_ATTRIBUTE, attr::number(record.id()))
            .update_expression(update_expression)
            .set_condition_expression(condition_expression)
            .set_expression_attribute_names(names)
            .set_expression_attribute_values(values)
            .send()
            .await
            .map_err(Error::from)?;
        Ok(())
    }

    async fn write_follow_up(&self, follow_up: FollowUp) -> Result<(), Error> {
        let table_name = self.config.table_name(follow_up.table_suffix);
        let mut names = None;
        let mut values = None;
        let update_expression =
            expr::ExpressionInput::from(follow_up.update).merge_into(&mut names, &mut values);
        tracing::debug!(table_name, id = follow_up.id, "writing follow-up");
        self.client
            .update_item()
            .table_name(&table_name)
            .key(ID_ATTRIBUTE, attr::number(follow_up.id))
            .update_expression(update_expression)
            .set_expression_attribute_names(names)
            .set_expression_attribute_values(values)
            .send()
            .await
            .map_err(Error::from)?;
        Ok(())
    }
}
