//! Built-in taxonomy
//!
//! The default tables shipped with docsort. Order within each table is the
//! classification order and must not be sorted.

use crate::department::DepartmentEntry;
use crate::document_type::DocumentTypeEntry;
use crate::project::ProjectEntry;
use crate::reference::{ReferenceCategory, ReferencePatternCategory};
use crate::taxonomy::Taxonomy;

/// Build the built-in taxonomy
///
/// # Examples
///
/// ```
/// let taxonomy = docsort_domain::builtin::taxonomy();
/// assert_eq!(taxonomy.projects()[0].code, "PD000");
/// assert_eq!(taxonomy.projects().last().unwrap().code, "DHSB");
/// ```
pub fn taxonomy() -> Taxonomy {
    let mut builder = Taxonomy::builder();
    for project in projects() {
        builder = builder.project(project);
    }
    for doc_type in document_types() {
        builder = builder.document_type(doc_type);
    }
    for department in departments() {
        builder = builder.department(department);
    }
    for category in reference_patterns() {
        builder = builder.reference_patterns(category);
    }
    // Static data, covered by `test_builtin_builds`.
    match builder.build() {
        Ok(taxonomy) => taxonomy,
        Err(e) => unreachable!("built-in taxonomy is invalid: {}", e),
    }
}

/// Built-in project table
pub fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry::new(
            "PD000",
            "General Projects",
            ["GEN", "GENERAL", "PD000 - GENERAL PROJECTS"],
        ),
        ProjectEntry::new(
            "PD001",
            "Movenpick Hotel & Spa and Oceana Residences",
            [
                "MOV",
                "OCEANA",
                "OHA",
                "DUKES",
                "Oceana Dukes Hotel & Apartments",
                "STL36",
                "OCEANA DUKES",
                "PD001-Oceana",
                "STL036 - OCEANA HOTEL and APARTMENTS",
            ],
        ),
        // No "WI" alias here: it is a substring of "WITH".
        ProjectEntry::new(
            "PD002",
            "Anantara Palm Jumeirah and Tiara Residences",
            [
                "ANANTARA PALM",
                "TIARA",
                "WORLD ISLANDS",
                "PD002-Tiara",
                "STL035 - ANANTARA WORLD ISLANDS DUBAI",
            ],
        ),
        ProjectEntry::new(
            "PD003",
            "The Royal Amwaj Resort & Spa",
            [
                "AMWAJ",
                "ROYAL",
                "ROYAL AMWAJ",
                "PD003-ROYAL AMWAJ RESORT and SPA",
                "Royal Amwaj",
            ],
        ),
        ProjectEntry::new(
            "PD004",
            "Anantara Jumeirah Lake and Jumeirah Lake Apartments",
            [
                "ANANTARA JLT",
                "JLT",
                "GOLF VIEWS LIMITED",
                "Jumeirah Lake Apartments and Offices",
                "PD004 - JLT (Old)",
                "JLT Villa 13",
                "JLT Villa 13 (Chairman Villa)",
            ],
        ),
        ProjectEntry::new("PD005", "Alkhawaneej", ["PD005-Alkhawaneej", "KHAWANEEJ"]),
        ProjectEntry::new(
            "PD006",
            "Movenpick Deira and The Centre Residences",
            [
                "MOVENPICK DEIRA",
                "DEIRA",
                "PD006-The Center Residence",
                "The Centre Residence Deira",
            ],
        ),
        ProjectEntry::new(
            "PD009",
            "Ibn Battuta Hotel & Spa and Gate Offices",
            [
                "IBG",
                "IBGOB",
                "IBGHR",
                "IBGRB",
                "OIBG",
                "IBN BATTUTA",
                "IBGH",
                "IBGO",
                "IBN BATTUTA GATE",
                "IBN BATTUTA HOTEL",
                "IBN BATTUTA OFFICES",
                "IBG Hotel and Residences",
                "IBG Office",
                "IBG Robotic",
                "Ibn Battuta Oaks Hotel Building",
            ],
        ),
        ProjectEntry::new("PD00A", "General Material Suppliers", ["GMS", "SUPPLIERS"]),
        ProjectEntry::new(
            "PD012",
            "DEC Residential Towers & Retail Complex",
            ["DEC", "DEC TOWERS"],
        ),
        ProjectEntry::new(
            "PD013",
            "Robinson Club & Iberotel Hotels",
            ["ROBINSON", "IBEROTEL"],
        ),
        ProjectEntry::new("PD015", "Dubai Tiara Towers", ["TIARA", "DTT"]),
        ProjectEntry::new("PD016", "Zabeel Investments Hotel Tower", ["ZABEEL", "ZIHT"]),
        ProjectEntry::new("PD017", "Blue City", ["PD017-Blue City"]),
        ProjectEntry::new(
            "PD031",
            "Seven Hotel and Apartments",
            [
                "SHA",
                "P220",
                "SEVEN HOTEL",
                "PLOT P-220",
                "STRED001 - SEVEN HOTEL & APARTMENTS",
            ],
        ),
        ProjectEntry::new(
            "PD037",
            "Rahala Residences",
            ["RAHALA", "STL037 - RAHALA RESIDENCES"],
        ),
        ProjectEntry::new(
            "7CJLT",
            "Seven City JLT",
            [
                "SEVEN CITY",
                "GOLF VIEWS",
                "GOLF VIEWS SEVEN CITY",
                "STRED002 - SEVEN CITY JLT",
            ],
        ),
        ProjectEntry::new(
            "DHSB",
            "Dubai Heights School Building",
            ["DUBAI HEIGHTS ACADEMY", "DHA", "STL00 - DUBAI HEIGHTS ACADEMY"],
        ),
    ]
}

/// Built-in document type table
pub fn document_types() -> Vec<DocumentTypeEntry> {
    vec![
        DocumentTypeEntry::new(
            "Letter",
            ["LOA", "LOI", "LOP", "LOW", "LEM", "LOR", "LTR"],
            ["Letter", "Correspondence"],
        ),
        DocumentTypeEntry::new(
            "Agreement",
            ["SA", "MSA", "NDA", "MOU", "MOA", "AMC"],
            ["Agreement", "Contract", "Settlement"],
        ),
        DocumentTypeEntry::new("Minutes", ["MOM", "MOD", "MOR"], ["Minutes", "Meeting"]),
        DocumentTypeEntry::new("Email", ["EMAIL"], ["Email", "Correspondence"]),
        DocumentTypeEntry::new("Fax", ["FAX"], ["Fax", "Facsimile"]),
    ]
}

/// Built-in department table
pub fn departments() -> Vec<DepartmentEntry> {
    vec![
        DepartmentEntry::new("STRED", "Seven Tides Real Estate Department", ["STRE", "STR"]),
        DepartmentEntry::new("STOAM", "Seven Tides Owner Association Management", ["STO", "ST-OAM"]),
        DepartmentEntry::new("SASBS", "Sultan Ahmed Sultan Bin Sulayem", ["SAS", "SASBSI"]),
        DepartmentEntry::new("BSI", "Bin Sulayem Investment", ["BSIL", "BS-INV"]),
        DepartmentEntry::new("ABS", "Abdullah Bin Sulayem", ["ABSI", "ABDULLAH"]),
        DepartmentEntry::new("GBS", "Ghanim Bin Sulayem", ["GBSI", "GHANIM", "GHANAM", "GHANEM"]),
        DepartmentEntry::new("CAD", "CAD Department", ["CADD"]),
        DepartmentEntry::new("HRA", "Human Resources", ["HR"]),
        DepartmentEntry::new("FIN", "Finance", ["FXH", "Financial"]),
        DepartmentEntry::new("PRP", "Property", ["Property"]),
        DepartmentEntry::new("ENG", "Engineering", ["ENGG"]),
    ]
}

/// Built-in reference pattern categories
///
/// Every pattern captures its sub-identifiers (qualifiers, numeric suffix,
/// year).
pub fn reference_patterns() -> Vec<ReferencePatternCategory> {
    vec![
        ReferencePatternCategory::new(
            ReferenceCategory::Standard,
            [
                // 340PD-2017
                r"(\d+)PD[-_](\d{4})",
                // SHA-340PD-2017
                r"([A-Z]+)[-_](\d+)PD[-_](\d{4})",
                // ST/AS/0426-2013
                r"([A-Z]+)/([A-Z]+)/(\d+)[-_](\d{4})",
            ],
        ),
        ReferencePatternCategory::new(
            ReferenceCategory::DepartmentProject,
            [
                // STRED-NKHL-GBS-SHA-305PWB-21PD-2023
                r"STRED[-_]([A-Z]+(?:[-_][A-Z]+)*)[-_](?:\d+[A-Z]+[-_])?(\d+)PD[-_](\d{4})",
                // STOAM-SI_ABS_OR-01PD-20
                r"STOAM[-_]([A-Z]+(?:[-_][A-Z]+)*)[-_](\d+)PD[-_](\d{2,4})",
                // STL-EME_ABS_OHA-340PD-2017
                r"STL[-_]([A-Z]+(?:[-_][A-Z]+)*)[-_](\d+)(?:PD)?[-_](\d{4})",
            ],
        ),
        ReferencePatternCategory::new(
            ReferenceCategory::LetterReferences,
            [
                // LOA-DHA-ASTECO-ABS-DHSB-04PD-2024
                r"LOA[-_]([A-Z]+(?:[-_][A-Z]+)*)[-_](\d+)PD[-_](\d{4})",
                // LTR-DEPT-001-2024
                r"LTR[-_]([A-Z]+)[-_](\d+)[-_](\d{4})",
            ],
        ),
        ReferencePatternCategory::new(
            ReferenceCategory::SpecialFormats,
            [
                r"terminated letter ref\. no\. .*?(\d+PD[-_]\d{4})",
                r"Response to Letter Ref\. .*?(\d+PD[-_]\d{4})",
                r"STRED Letter No[-_](\d+PD[-_]\d{4})",
            ],
        ),
    ]
}
