//! Table output formatting using the `tabled` crate

use social_core::Recommendation;
use tabled::{
    builder::Builder,
    settings::{object::Columns, style::Style, Alignment, Modify},
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Format ranked recommendations as a table
    pub fn recommendations(recommendations: &[Recommendation]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Name", "Mutual", "Via"]);

        for (rank, rec) in recommendations.iter().enumerate() {
            builder.push_record([
                (rank + 1).to_string(),
                rec.name.clone(),
                rec.score.to_string(),
                rec.mutual_friends.join(", "),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        table.with(Modify::new(Columns::single(0)).with(Alignment::right()));
        table.with(Modify::new(Columns::single(2)).with(Alignment::right()));
        table.to_string()
    }

    /// Format key/value pairs as a borderless two-column table
    pub fn key_value(pairs: &[(&str, String)]) -> String {
        let mut builder = Builder::default();
        for (key, value) in pairs {
            builder.push_record([key.to_string(), value.clone()]);
        }

        let mut table = builder.build();
        table.with(Style::blank());
        table.to_string()
    }
}
