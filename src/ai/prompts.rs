#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptVariant {
    #[default]
    Type1,
    Type2,
}

impl PromptVariant {
    pub fn label(self) -> &'static str {
        match self {
            PromptVariant::Type1 => "SCD Type 1",
            PromptVariant::Type2 => "SCD Type 2",
        }
    }
}

/// SCD2 metadata column names. Left empty when the form runs in Type 1 mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scd2Columns {
    pub eff_from: String,
    pub eff_to: String,
    pub current_flag: String,
    pub version: String,
}

/// Everything the operator typed. Free text, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub variant: PromptVariant,
    pub source_table: String,
    pub target_table: String,
    pub business_keys: String,
    pub attribute_columns: String,
    pub additional_rules: String,
    pub scd2: Scd2Columns,
}

pub fn build_prompt(form: &FormInput) -> String {
    match form.variant {
        PromptVariant::Type1 => build_scd_type1_prompt(
            &form.source_table,
            &form.target_table,
            &form.business_keys,
            &form.attribute_columns,
            &form.additional_rules,
        ),
        PromptVariant::Type2 => build_scd_type2_prompt(
            &form.source_table,
            &form.target_table,
            &form.business_keys,
            &form.attribute_columns,
            &form.scd2,
            &form.additional_rules,
        ),
    }
}

pub fn build_scd_type1_prompt(
    source_table: &str,
    target_table: &str,
    business_keys: &str,
    attribute_columns: &str,
    additional_rules: &str,
) -> String {
    format!(
        r#"
You are a senior Data QA Engineer.

Generate detailed QA test cases to validate a Slowly Changing Dimension Type 1 (SCD1)
load between the following tables.

Source table: {source_table}
Target table: {target_table}
Business key columns: {business_keys}
Attribute columns (overwritten on change): {attribute_columns}

Additional rules:
{additional_rules}

Requirements:
- Assume SCD1 implemented in PySpark + Delta on Databricks.
- Generate 10–15 test cases.
- Include positive + negative scenarios.
- Include:
  • Initial load
  • Incremental load
  • Updates
  • No-change rows
  • Duplicate keys
  • Nulls
  • Data type issues

Output format (markdown table):

| Test Case ID | Scenario | Preconditions | Input Data Setup | Steps | Expected Result |
"#
    )
}

pub fn build_scd_type2_prompt(
    source_table: &str,
    target_table: &str,
    business_keys: &str,
    attribute_columns: &str,
    scd2: &Scd2Columns,
    additional_rules: &str,
) -> String {
    format!(
        r#"
You are a senior Data QA Engineer.

Generate detailed QA test cases to validate an SCD Type 2 load.

Source: {source_table}
Target: {target_table}
Business Keys: {business_keys}
Tracked Columns: {attribute_columns}

SCD2 Metadata:
- Effective From: {eff_from}
- Effective To: {eff_to}
- Current Flag: {current_flag}
- Version Column: {version}

Additional Rules:
{additional_rules}

Requirements:
- Assume PySpark + Delta Lake on Databricks
- Generate 12–18 cases
- Cover:
  • Initial load
  • First insert
  • Attribute change -> close old + open new
  • Multiple historical changes
  • Late-arriving data
  • Overlapping ranges
  • Current flag issues
  • Duplicate keys
  • Invalid effective dates

Output format (markdown table):

| Test Case ID | Scenario | Preconditions | Input Data Setup | Steps | Expected Result |
"#,
        eff_from = scd2.eff_from,
        eff_to = scd2.eff_to,
        current_flag = scd2.current_flag,
        version = scd2.version,
    )
}
