//! Field identifiers and their presentation metadata

use super::options::{PROGRAMME_OPTIONS, SOURCE_OPTIONS, SPECIALITE_OPTIONS};

/// How a field is edited and what hint it carries.
///
/// Hints are informational only; nothing here restricts what gets stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number { min: f64, max: f64, step: Option<f64> },
    Choice(&'static [&'static str]),
}

impl FieldKind {
    /// Range hint shown next to the label, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            FieldKind::Number {
                min,
                max,
                step: Some(_),
            } => Some(format!("{min}–{max}, 2 déc.")),
            FieldKind::Number {
                min,
                max,
                step: None,
            } => Some(format!("{min}–{max}")),
            _ => None,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Choice(_))
    }

    /// Options offered by a choice field (empty for free text)
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Choice(options) => options,
            _ => &[],
        }
    }
}

/// The eleven fields of a prospect record, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Mobile,
    Source,
    GraduationYear,
    Specialty,
    OverallAverage,
    MathGrade,
    PhysicsGrade,
    FrenchGrade,
    Program,
}

impl FieldId {
    pub const ALL: [FieldId; 11] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Mobile,
        FieldId::Source,
        FieldId::GraduationYear,
        FieldId::Specialty,
        FieldId::OverallAverage,
        FieldId::MathGrade,
        FieldId::PhysicsGrade,
        FieldId::FrenchGrade,
        FieldId::Program,
    ];

    /// Fields that must be non-blank before the form can be sent
    pub const REQUIRED: [FieldId; 3] = [FieldId::FullName, FieldId::Mobile, FieldId::Source];

    /// Key used in the JSON payload
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::FullName => "nomPrenom",
            FieldId::Email => "email",
            FieldId::Mobile => "mobile",
            FieldId::Source => "source",
            FieldId::GraduationYear => "anneeDuBac",
            FieldId::Specialty => "specialite",
            FieldId::OverallAverage => "moyenneGenerale",
            FieldId::MathGrade => "noteMaths",
            FieldId::PhysicsGrade => "notePhysique",
            FieldId::FrenchGrade => "noteFrancais",
            FieldId::Program => "programme",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FullName => "Nom et prénom *",
            FieldId::Email => "Email",
            FieldId::Mobile => "Mobile *",
            FieldId::Source => "Source *",
            FieldId::GraduationYear => "Année du bac",
            FieldId::Specialty => "Spécialité",
            FieldId::OverallAverage => "Moyenne générale",
            FieldId::MathGrade => "Note Maths",
            FieldId::PhysicsGrade => "Note Physique",
            FieldId::FrenchGrade => "Note Français",
            FieldId::Program => "Programme souhaité",
        }
    }

    /// Text shown in place of an empty value
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::FullName => "Jean Dupont",
            FieldId::Email => "jean@example.com",
            FieldId::Mobile => "06 12 34 56 78",
            FieldId::Source => "Comment nous avez-vous connu ?",
            FieldId::GraduationYear => "2023",
            FieldId::Specialty => "Sélectionnez une spécialité",
            FieldId::OverallAverage => "15.50",
            FieldId::MathGrade => "16.00",
            FieldId::PhysicsGrade => "14.50",
            FieldId::FrenchGrade => "13.75",
            FieldId::Program => "Sélectionnez un programme",
        }
    }

    pub fn kind(&self) -> FieldKind {
        const GRADE: FieldKind = FieldKind::Number {
            min: 0.0,
            max: 20.0,
            step: Some(0.01),
        };

        match self {
            FieldId::FullName => FieldKind::Text,
            FieldId::Email => FieldKind::Email,
            FieldId::Mobile => FieldKind::Tel,
            FieldId::Source => FieldKind::Choice(SOURCE_OPTIONS),
            FieldId::GraduationYear => FieldKind::Number {
                min: 1990.0,
                max: 2030.0,
                step: None,
            },
            FieldId::Specialty => FieldKind::Choice(SPECIALITE_OPTIONS),
            FieldId::OverallAverage
            | FieldId::MathGrade
            | FieldId::PhysicsGrade
            | FieldId::FrenchGrade => GRADE,
            FieldId::Program => FieldKind::Choice(PROGRAMME_OPTIONS),
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Position of this field in display order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|field| field == self)
            .unwrap_or_default()
    }
}
