//! Measure and council lists that populate the dashboard's selectors.
//!
//! # CSV Formats
//!
//! - **Measure groups** (has headers): `Measure Group Description`
//! - **Councils** (has headers): `Geographical Description,Council region`

use crate::ranking::compare_names;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Council {
    pub name: String,
    pub region: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub measures: Vec<String>,
    pub councils: Vec<Council>,
    pub regions: Vec<String>,
}

impl Catalog {
    /// Parse both fixture CSVs. Blank rows are skipped; lists are sorted
    /// and deduplicated.
    pub fn from_csv(measures_csv: &str, councils_csv: &str) -> anyhow::Result<Self> {
        let mut measures = Vec::new();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(measures_csv.as_bytes());
        for result in rdr.records() {
            let r = result?;
            let name = r.get(0).unwrap_or("").trim();
            if !name.is_empty() {
                measures.push(name.to_string());
            }
        }
        measures.sort();
        measures.dedup();

        let mut councils = Vec::new();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(councils_csv.as_bytes());
        for result in rdr.records() {
            let r = result?;
            let name = r.get(0).unwrap_or("").trim();
            let region = r.get(1).unwrap_or("").trim();
            if name.is_empty() {
                continue;
            }
            councils.push(Council {
                name: name.to_string(),
                region: region.to_string(),
            });
        }
        councils.sort_by(|a, b| compare_names(&a.name, &b.name));
        councils.dedup_by(|a, b| a.name == b.name);

        let mut regions: Vec<String> = councils
            .iter()
            .map(|c| c.region.clone())
            .filter(|r| !r.is_empty())
            .collect();
        regions.sort();
        regions.dedup();

        log::info!(
            "[LGO] catalog: {} measures, {} councils, {} regions",
            measures.len(),
            councils.len(),
            regions.len()
        );

        Ok(Self {
            measures,
            councils,
            regions,
        })
    }

    pub fn council_names(&self) -> Vec<String> {
        self.councils.iter().map(|c| c.name.clone()).collect()
    }

    pub fn default_measure(&self) -> Option<&str> {
        self.measures.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEASURES: &str = "\
Measure Group Description
Social care-related quality of life
Proportion of people who use services who have control over their daily life
Social care-related quality of life

";

    const COUNCILS: &str = "\
Geographical Description,Council region
York,Yorkshire and The Humber
Barnsley,Yorkshire and The Humber
Camden,London
Leeds,Yorkshire and The Humber
";

    #[test]
    fn parses_and_sorts_measures() {
        let catalog = Catalog::from_csv(MEASURES, COUNCILS).unwrap();
        assert_eq!(
            catalog.measures,
            vec![
                "Proportion of people who use services who have control over their daily life"
                    .to_string(),
                "Social care-related quality of life".to_string(),
            ]
        );
        assert_eq!(
            catalog.default_measure(),
            Some("Proportion of people who use services who have control over their daily life")
        );
    }

    #[test]
    fn derives_regions_from_councils() {
        let catalog = Catalog::from_csv(MEASURES, COUNCILS).unwrap();
        assert_eq!(
            catalog.regions,
            vec!["London".to_string(), "Yorkshire and The Humber".to_string()]
        );
        assert_eq!(
            catalog.council_names(),
            vec!["Barnsley", "Camden", "Leeds", "York"]
        );
    }

    #[test]
    fn header_only_fixtures_give_empty_catalog() {
        let catalog = Catalog::from_csv(
            "Measure Group Description\n",
            "Geographical Description,Council region\n",
        )
        .unwrap();
        assert!(catalog.measures.is_empty());
        assert!(catalog.regions.is_empty());
        assert_eq!(catalog.default_measure(), None);
    }
}
