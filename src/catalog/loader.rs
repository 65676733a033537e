use super::Catalog;
use crate::error::{TeamForgeError, TfResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

impl Catalog {
    /// Loads a catalog from disk. `.csv` files use the tabular format,
    /// everything else is read as JSON.
    pub fn load_from_file(path: impl AsRef<Path>) -> TfResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        let catalog = if is_csv {
            Self::from_csv_reader(file)?
        } else {
            Self::from_json_reader(BufReader::new(file))?
        };

        info!(
            path = %path.display(),
            professions = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// JSON shape: `{ "Guardian": { "heal": ["aegis", ...] }, "Thief": {} }`.
    pub fn from_json_reader<R: Read>(reader: R) -> TfResult<Self> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        catalog.check_names()?;
        Ok(catalog)
    }

    pub fn from_json_str(text: &str) -> TfResult<Self> {
        Self::from_json_reader(text.as_bytes())
    }

    /// CSV shape: `profession,role,tags` with `;`-separated tags. A row with
    /// an empty role registers a profession that has no usable roles.
    pub fn from_csv_reader<R: Read>(reader: R) -> TfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut catalog = Catalog::new();
        let mut skipped = 0;

        for (row_idx, result) in rdr.records().enumerate() {
            let rec = result?;
            let profession = rec.get(0).unwrap_or_default();
            if profession.is_empty() {
                debug!(row = row_idx + 2, "Skipping row without profession");
                skipped += 1;
                continue;
            }

            let role = rec.get(1).unwrap_or_default();
            if role.is_empty() {
                catalog.insert_profession(profession);
                continue;
            }

            let tags = rec
                .get(2)
                .unwrap_or_default()
                .split(';')
                .map(str::trim)
                .filter(|t| !t.is_empty());
            catalog.insert(profession, role, tags);
        }

        if skipped > 0 {
            warn!(skipped, "Skipped malformed catalog rows");
        }

        catalog.check_names()?;
        Ok(catalog)
    }

    fn check_names(&self) -> TfResult<()> {
        for (profession, roles) in self.professions() {
            if profession.trim().is_empty() || profession.contains('/') {
                return Err(TeamForgeError::Validation(format!(
                    "Invalid profession name '{}'",
                    profession
                )));
            }
            if let Some(role) = roles.keys().find(|r| r.trim().is_empty() || r.contains('/')) {
                return Err(TeamForgeError::Validation(format!(
                    "Invalid role name '{}' for {}",
                    role, profession
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Assignment;

    #[test]
    fn test_csv_rows_merge_roles() {
        let data = "profession,role,tags\n\
                    Guardian,heal,aegis;stability\n\
                    Guardian,dps,might\n\
                    Warrior,,\n";
        let catalog = Catalog::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        let tags = catalog
            .tags_for(&Assignment::new("Guardian", "heal"))
            .unwrap();
        assert!(tags.contains("aegis") && tags.contains("stability"));
        assert!(catalog.roles_of("Warrior").unwrap().is_empty());
    }

    #[test]
    fn test_json_rejects_slash_in_role() {
        let err = Catalog::from_json_str(r#"{"Guardian": {"heal/dps": []}}"#).unwrap_err();
        assert!(matches!(err, TeamForgeError::Validation(_)));
    }
}
