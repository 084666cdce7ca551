use crate::ai::prompts::{FormInput, PromptVariant, Scd2Columns};
use crate::error::ScdError;
use std::io::{self, BufRead, Write};

pub const DEFAULT_SOURCE_TABLE: &str = "src_customer_dim";
pub const DEFAULT_TARGET_TABLE: &str = "dim_customer";
pub const DEFAULT_BUSINESS_KEYS: &str = "customer_id";
pub const DEFAULT_ATTRIBUTE_COLUMNS: &str = "name,status,type";
pub const DEFAULT_EFF_FROM: &str = "eff_from_dt";
pub const DEFAULT_EFF_TO: &str = "eff_to_dt";
pub const DEFAULT_CURRENT_FLAG: &str = "is_current";
pub const DEFAULT_VERSION: &str = "version_num";

/// Answer that stores an empty value instead of the default.
pub const CLEAR_ANSWER: &str = "-";
/// Line that ends the multi-line rules field.
pub const END_OF_TEXT: &str = ".";

/// Line-oriented terminal form. An empty answer keeps the shown default,
/// and so does end of input; `-` clears the field.
pub struct FormCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FormCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn collect(&mut self) -> Result<FormInput, ScdError> {
        let variant = self.choose_variant()?;

        writeln!(self.output, "\n🔢 Table & Column Metadata")?;
        writeln!(self.output, "(Enter keeps the default, '{CLEAR_ANSWER}' leaves the field empty)")?;
        let source_table = self.ask("Source Table", DEFAULT_SOURCE_TABLE)?;
        let target_table = self.ask("Target Table", DEFAULT_TARGET_TABLE)?;
        let business_keys = self.ask("Business Keys (comma separated)", DEFAULT_BUSINESS_KEYS)?;
        let attribute_columns = self.ask("Tracked / Overwritten Columns", DEFAULT_ATTRIBUTE_COLUMNS)?;
        let additional_rules = self.ask_multiline("Additional Rules (optional, finish with a line containing only '.')")?;

        let scd2 = match variant {
            PromptVariant::Type1 => Scd2Columns::default(),
            PromptVariant::Type2 => {
                writeln!(self.output, "\n⏳ SCD2 Metadata Columns")?;
                Scd2Columns {
                    eff_from: self.ask("Effective From", DEFAULT_EFF_FROM)?,
                    eff_to: self.ask("Effective To", DEFAULT_EFF_TO)?,
                    current_flag: self.ask("Current Flag", DEFAULT_CURRENT_FLAG)?,
                    version: self.ask("Version Column", DEFAULT_VERSION)?,
                }
            }
        };

        Ok(FormInput {
            variant,
            source_table,
            target_table,
            business_keys,
            attribute_columns,
            additional_rules,
            scd2,
        })
    }

    /// Yes/no question. `None` means input ended before an answer.
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<Option<bool>, ScdError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{question} {hint}: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn choose_variant(&mut self) -> Result<PromptVariant, ScdError> {
        writeln!(self.output, "⚙️  Select SCD Type")?;
        writeln!(self.output, "  1) {}", PromptVariant::Type1.label())?;
        writeln!(self.output, "  2) {}", PromptVariant::Type2.label())?;
        loop {
            write!(self.output, "Choice [1]: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(PromptVariant::default());
            };
            match line.trim() {
                "" | "1" => return Ok(PromptVariant::Type1),
                "2" => return Ok(PromptVariant::Type2),
                other => writeln!(self.output, "Unknown choice '{other}', pick 1 or 2.")?,
            }
        }
    }

    fn ask(&mut self, label: &str, default: &str) -> io::Result<String> {
        write!(self.output, "{label} [{default}]: ")?;
        self.output.flush()?;

        Ok(match self.read_line()? {
            Some(line) if line == CLEAR_ANSWER => String::new(),
            Some(line) if !line.is_empty() => line,
            _ => default.to_string(),
        })
    }

    fn ask_multiline(&mut self, label: &str) -> io::Result<String> {
        writeln!(self.output, "{label}:")?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line == END_OF_TEXT {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// Next line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}
