//! Schema catalog: static descriptors for the four seeded tables.
//!
//! Built once at compile time and passed by reference, so no call site
//! re-declares table shape or threads bare table-name strings around.
//! The descriptors carry everything the store adapters need: column names,
//! types, nullability, uniqueness keys and the foreign-key edges.

/// SQL-level type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Store-assigned monotonic surrogate key.
    BigSerial,
    BigInt,
    Text,
    VarChar(u16),
    Numeric,
    Date,
    TimestampTz,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnDescriptor {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

/// Static description of one target table.
#[derive(Debug)]
pub struct TableDescriptor {
    pub name: &'static str,
    pub columns: &'static [ColumnDescriptor],
    /// Columns under a UNIQUE constraint, if the table has one.
    pub unique_key: Option<&'static [&'static str]>,
    pub foreign_keys: &'static [ForeignKey],
}

impl TableDescriptor {
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }
}

const fn col(name: &'static str, ty: ColumnType, nullable: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        name,
        ty,
        nullable,
        primary_key: false,
    }
}

const ID: ColumnDescriptor = ColumnDescriptor {
    name: "id",
    ty: ColumnType::BigSerial,
    nullable: false,
    primary_key: true,
};

/// Conflict key for the scope × source-name cross product.
pub const SOURCE_CONFLICT_KEY: &[&str] = &["scope", "source_name"];

/// Conflict key enforcing one factor per source.
pub const FACTOR_CONFLICT_KEY: &[&str] = &["source_id"];

pub static ORGANIZATIONS: TableDescriptor = TableDescriptor {
    name: "organizations",
    columns: &[
        ID,
        col("name", ColumnType::Text, false),
        col("description", ColumnType::Text, true),
        col("created_at", ColumnType::TimestampTz, true),
    ],
    unique_key: None,
    foreign_keys: &[],
};

pub static EMISSION_SOURCES: TableDescriptor = TableDescriptor {
    name: "emission_sources",
    columns: &[
        ID,
        col("scope", ColumnType::Text, false),
        col("source_name", ColumnType::Text, false),
        col("description", ColumnType::Text, true),
    ],
    unique_key: Some(SOURCE_CONFLICT_KEY),
    foreign_keys: &[],
};

pub static EMISSION_FACTORS: TableDescriptor = TableDescriptor {
    name: "emission_factors",
    columns: &[
        ID,
        col("source_id", ColumnType::BigInt, false),
        col("factor_value", ColumnType::Numeric, false),
        col("unit", ColumnType::VarChar(50), false),
        col("calculation_method", ColumnType::Text, true),
    ],
    unique_key: Some(FACTOR_CONFLICT_KEY),
    foreign_keys: &[ForeignKey {
        column: "source_id",
        references_table: "emission_sources",
        references_column: "id",
    }],
};

// Note the plural table name: the upstream schema spells it `emissions_logs`.
pub static EMISSIONS_LOGS: TableDescriptor = TableDescriptor {
    name: "emissions_logs",
    columns: &[
        ID,
        col("source_id", ColumnType::BigInt, false),
        col("organization_id", ColumnType::BigInt, false),
        col("date", ColumnType::Date, true),
        col("quantity", ColumnType::Numeric, true),
        col("total_emissions", ColumnType::Numeric, true),
    ],
    unique_key: None,
    foreign_keys: &[
        ForeignKey {
            column: "source_id",
            references_table: "emission_sources",
            references_column: "id",
        },
        ForeignKey {
            column: "organization_id",
            references_table: "organizations",
            references_column: "id",
        },
    ],
};

/// All seeded tables in foreign-key dependency order.
pub static ALL_TABLES: &[&TableDescriptor] = &[
    &ORGANIZATIONS,
    &EMISSION_SOURCES,
    &EMISSION_FACTORS,
    &EMISSIONS_LOGS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_order_respects_foreign_keys() {
        // Every FK target must appear earlier in ALL_TABLES than its referrer.
        for (i, table) in ALL_TABLES.iter().enumerate() {
            for fk in table.foreign_keys {
                let target = ALL_TABLES
                    .iter()
                    .position(|t| t.name == fk.references_table)
                    .expect("FK references a known table");
                assert!(target < i, "{} must precede {}", fk.references_table, table.name);
            }
        }
    }

    #[test]
    fn test_unique_keys_name_real_columns() {
        for table in ALL_TABLES {
            if let Some(key) = table.unique_key {
                for column in key {
                    assert!(table.column(column).is_some());
                }
            }
        }
    }

    #[test]
    fn test_every_table_has_surrogate_id() {
        for table in ALL_TABLES {
            let id = table.column("id").expect("id column");
            assert!(id.primary_key);
            assert_eq!(id.ty, ColumnType::BigSerial);
        }
    }
}
