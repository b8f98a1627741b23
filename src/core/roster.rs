//! Employee roster: Resource No. → Personal Number.

use crate::config::{Config, DuplicatePolicy};
use crate::errors::{AppError, AppResult};
use crate::models::EmployeeRecord;
use crate::schema::{Field, FileRole, Schema, validate};
use crate::sheet::cell::cell_text;
use crate::sheet::{SheetTable, read_table};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct EmployeeMap {
    by_resource: HashMap<String, String>,
}

impl EmployeeMap {
    /// Read the roster workbook and build the lookup table.
    pub fn load(path: &Path, cfg: &Config) -> AppResult<Self> {
        let table = read_table(path)?;
        let map = Self::from_table(&table, cfg)?;
        log::info!("{}: {} employee(s) loaded", table.file_name, map.len());
        Ok(map)
    }

    pub fn from_table(table: &SheetTable, cfg: &Config) -> AppResult<Self> {
        let schema = Schema::for_role(FileRole::Roster, cfg);
        let resolved = validate(table, &schema).map_err(|v| AppError::MissingColumns {
            file: v.file_name,
            columns: v.missing_columns.into_iter().collect(),
        })?;

        let mut records = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            let resource_no = cell_text(resolved.cell(row, Field::ResourceNo));
            let personal_number = cell_text(resolved.cell(row, Field::PersonalNumber));

            if resource_no.is_empty() {
                continue;
            }
            if personal_number.is_empty() {
                log::warn!(
                    "{}, row {}: Resource No. '{}' has no personal number and is ignored",
                    table.file_name,
                    table.row_number(idx),
                    resource_no
                );
                continue;
            }

            records.push(EmployeeRecord::new(resource_no, personal_number));
        }

        Self::from_records(&table.file_name, records, cfg.duplicate_policy)
    }

    /// Build the table from records, applying `policy` to conflicting duplicates.
    /// Repeated identical records are always accepted.
    pub fn from_records(
        file_name: &str,
        records: impl IntoIterator<Item = EmployeeRecord>,
        policy: DuplicatePolicy,
    ) -> AppResult<Self> {
        let mut by_resource: HashMap<String, String> = HashMap::new();

        for record in records {
            match by_resource.entry(record.resource_no.trim().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(record.personal_number);
                }
                Entry::Occupied(mut slot) => {
                    if *slot.get() == record.personal_number {
                        continue;
                    }
                    match policy {
                        DuplicatePolicy::Error => {
                            return Err(AppError::DuplicateKey {
                                file: file_name.to_string(),
                                resource_no: slot.key().clone(),
                                first: slot.get().clone(),
                                second: record.personal_number,
                            });
                        }
                        DuplicatePolicy::FirstWins => {
                            log::warn!(
                                "Resource No. '{}' repeated; keeping '{}', ignoring '{}'",
                                slot.key(),
                                slot.get(),
                                record.personal_number
                            );
                        }
                        DuplicatePolicy::LastWins => {
                            log::warn!(
                                "Resource No. '{}' repeated; '{}' replaces '{}'",
                                slot.key(),
                                record.personal_number,
                                slot.get()
                            );
                            slot.insert(record.personal_number);
                        }
                    }
                }
            }
        }

        Ok(Self { by_resource })
    }

    pub fn personal_number(&self, resource_no: &str) -> Option<&str> {
        self.by_resource.get(resource_no.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_resource.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_resource.is_empty()
    }
}
