use crate::attr;
use crate::expr::update::Update;
use crate::import::{Entity, FollowUp, ImportOptions};
use crate::model::record::{Crop, Ingredient, Pest, Registrant, Resistance};

use aws_sdk_dynamodb::types;

/// Sets a non-empty optional field, or clears it when the value is empty, so
/// downstream readers never see an empty string where "absent" is meant.
fn set_or_remove(
    sets: &mut Vec<(String, types::AttributeValue)>,
    removes: &mut Vec<String>,
    name: &str,
    value: &str,
) {
    if value.is_empty() {
        removes.push(name.to_string());
    } else {
        sets.push((name.to_string(), attr::string(value)));
    }
}

fn combine(sets: Vec<(String, types::AttributeValue)>, removes: Vec<String>) -> Update {
    if removes.is_empty() {
        Update::Set(sets)
    } else {
        Update::Combined(vec![Update::Set(sets), Update::Remove(removes)])
    }
}

impl Entity for Crop {
    const TABLE_SUFFIX: &'static str = "Crops";

    fn id(&self) -> i64 {
        self.id
    }

    fn update(&self, _options: &ImportOptions) -> Update {
        let mut sets = vec![
            ("Code".to_string(), attr::string(&self.code)),
            ("Name".to_string(), attr::string(&self.name)),
        ];
        let mut removes = Vec::new();
        set_or_remove(&mut sets, &mut removes, "Notes", &self.notes);
        combine(sets, removes)
    }
}

impl Entity for Pest {
    const TABLE_SUFFIX: &'static str = "Pests";

    fn id(&self) -> i64 {
        self.id
    }

    fn update(&self, _options: &ImportOptions) -> Update {
        let mut sets = vec![
            ("Name".to_string(), attr::string(&self.name)),
            ("Code".to_string(), attr::string(&self.code)),
        ];
        let mut removes = Vec::new();
        set_or_remove(&mut sets, &mut removes, "Notes", &self.notes);
        combine(sets, removes)
    }
}

impl Entity for Ingredient {
    const TABLE_SUFFIX: &'static str = "Ingredients";

    fn id(&self) -> i64 {
        self.id
    }

    fn update(&self, _options: &ImportOptions) -> Update {
        let mut sets = vec![
            ("ResistanceId".to_string(), attr::number(self.resistance.id)),
            ("Name".to_string(), attr::string(&self.name)),
            ("Code".to_string(), attr::string(&self.code)),
        ];
        // ManagementCode is a legacy attribute; imports always clear it.
        let mut removes = vec!["ManagementCode".to_string()];
        set_or_remove(&mut sets, &mut removes, "Notes", &self.notes);
        combine(sets, removes)
    }

    fn follow_up(&self, _options: &ImportOptions) -> Option<FollowUp> {
        // An empty code marks the sentinel "no resistance" record; it never
        // collects ingredient back-references.
        if self.resistance.code.is_empty() {
            return None;
        }
        Some(FollowUp {
            table_suffix: Resistance::TABLE_SUFFIX,
            id: self.resistance.id,
            update: Update::Add(vec![(
                "Ingredients".to_string(),
                attr::number_set([self.id]),
            )]),
        })
    }
}

impl Entity for Resistance {
    const TABLE_SUFFIX: &'static str = "Resistances";

    fn id(&self) -> i64 {
        self.id
    }

    fn update(&self, options: &ImportOptions) -> Update {
        let sets = vec![
            ("Source".to_string(), attr::string(&self.source)),
            ("Code".to_string(), attr::string(&self.code)),
            ("MethodOfAction".to_string(), attr::string(&self.method_of_action)),
        ];
        if options.clear_ingredients {
            Update::Combined(vec![
                Update::Set(sets),
                Update::Remove(vec!["Ingredients".to_string()]),
            ])
        } else {
            Update::Set(sets)
        }
    }
}

impl Entity for Registrant {
    const TABLE_SUFFIX: &'static str = "Registrants";

    fn id(&self) -> i64 {
        self.id
    }

    fn update(&self, _options: &ImportOptions) -> Update {
        let mut sets = vec![("Name".to_string(), attr::string(&self.name))];
        let mut removes = Vec::new();
        // The JSON field is Website; the stored attribute is Url.
        set_or_remove(&mut sets, &mut removes, "Url", &self.website);
        combine(sets, removes)
    }
}
