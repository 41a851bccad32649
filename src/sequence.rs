//! Optimistic sequence-counter updates.
//!
//! Sequence records live in the `{prefix}Sequences` table as
//! `{SequenceName, NextId}` pairs and hold the next available id for one
//! entity table. Importers advance them with a single conditional write
//! instead of a read-modify-write round trip, so concurrent imports can race
//! on this path safely: whichever candidate is highest wins, and a lost race
//! is a successful no-op.

use crate::{attr, error::Error, expr};
use expr::condition::{Condition, ConditionList, KeyCondition, LogicalOperator};
use expr::update::Update;

use aws_sdk_dynamodb::{Client, types};
use std::collections;

/// Key attribute of the sequences table.
const SEQUENCE_NAME_ATTRIBUTE: &str = "SequenceName";

/// Counter attribute of a sequence record.
const NEXT_ID_ATTRIBUTE: &str = "NextId";

/// How a sequence update was resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SequenceOutcome {
    /// The stored counter was created or advanced to the candidate value.
    Advanced,
    /// The stored counter was already at or beyond the candidate value; the
    /// record was left untouched.
    AlreadyAhead,
}

/// A conditional "advance high-water-mark" update of one sequence record.
///
/// The write sets `NextId` to the candidate value under the condition that
/// the record does not exist or its stored `NextId` is smaller. A failed
/// condition is not an error: it means the counter is already far enough
/// along. Counters can therefore never be decreased through this path, which
/// is what an id generator requires.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceUpdate {
    /// The sequence record to update, e.g. `"PICOLDevCrops.Id"`.
    pub sequence_name: String,
    /// The candidate next id, normally `highest imported id + 1`.
    pub next_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
struct SequenceUpdateInput {
    key: types::AttributeValue,
    update_expression: String,
    condition_expression: String,
    expression_attribute_names: Option<collections::HashMap<String, String>>,
    expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
}

impl TryFrom<&SequenceUpdate> for SequenceUpdateInput {
    type Error = serde_dynamo::Error;

    fn try_from(update: &SequenceUpdate) -> Result<Self, Self::Error> {
        let assignment = Update::Set(vec![(
            NEXT_ID_ATTRIBUTE.to_string(),
            attr::number(update.next_id),
        )]);
        let guard = ConditionList {
            operator: LogicalOperator::Or,
            conditions: vec![
                KeyCondition {
                    name: SEQUENCE_NAME_ATTRIBUTE.to_string(),
                    condition: Condition::Null,
                },
                KeyCondition {
                    name: NEXT_ID_ATTRIBUTE.to_string(),
                    condition: Condition::LessThan(update.next_id),
                },
            ],
        };

        let mut expression_attribute_names = None;
        let mut expression_attribute_values = None;
        let update_expression = expr::ExpressionInput::from(assignment)
            .merge_into(&mut expression_attribute_names, &mut expression_attribute_values);
        let condition_expression = expr::ExpressionInput::try_from(guard)?
            .merge_into(&mut expression_attribute_names, &mut expression_attribute_values);

        Ok(Self {
            key: attr::string(&update.sequence_name),
            update_expression,
            condition_expression,
            expression_attribute_names,
            expression_attribute_values,
        })
    }
}

impl SequenceUpdate {
    /// Execute the update against the given sequences table.
    pub async fn send(
        self,
        client: &Client,
        table_name: &str,
    ) -> Result<SequenceOutcome, Error> {
        tracing::debug!(
            table_name,
            sequence_name = %self.sequence_name,
            next_id = self.next_id,
            "updating sequence"
        );
        let input = SequenceUpdateInput::try_from(&self)?;
        let result = client
            .update_item()
            .table_name(table_name)
            .key(SEQUENCE_NAME_ATTRIBUTE, input.key)
            .update_expression(input.update_expression)
            .condition_expression(input.condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .send()
            .await;
        match result {
            Ok(_) => Ok(SequenceOutcome::Advanced),
            Err(error) => {
                let error = Error::from(error);
                if error.is_conditional_check_failed() {
                    tracing::debug!(
                        sequence_name = %self.sequence_name,
                        "sequence already at or beyond candidate"
                    );
                    Ok(SequenceOutcome::AlreadyAhead)
                } else {
                    Err(error)
                }
            }
        }
    }
}
