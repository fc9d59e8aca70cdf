//! # USCI Registration Departments and Categories
//!
//! The first two characters of a USCI name the registering authority
//! (登记管理部门代码) and the kind of organization it registered
//! (机构类别代码). Categories are only meaningful relative to their
//! department: `9` under department `1` means 其他, under department `9`
//! it is not registered at all.

use serde::Serialize;

/// An organization category registered under a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    /// Single-character category code.
    pub code: char,
    /// Category name. Empty for department `Y`.
    pub name: &'static str,
}

const fn c(code: char, name: &'static str) -> Category {
    Category { code, name }
}

static ESTABLISHMENT: [Category; 4] = [
    c('1', "机关"),
    c('2', "事业单位"),
    c('3', "中央编办直接管理机构编制的群众团体"),
    c('9', "其他"),
];

static CIVIL_AFFAIRS: [Category; 4] = [
    c('1', "社会团体"),
    c('2', "民办非企业单位"),
    c('3', "基金会"),
    c('9', "其他"),
];

static INDUSTRY: [Category; 3] = [c('1', "企业"), c('2', "个体工商户"), c('3', "农民专业合作社")];

static OTHER: [Category; 1] = [c('1', "")];

/// Registration management department (first USCI character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// `1`: institutional establishment offices (机构编制).
    Establishment,
    /// `5`: civil affairs (民政).
    CivilAffairs,
    /// `9`: industry and commerce (工商).
    Industry,
    /// `Y`: any other registering authority (其它).
    Other,
}

impl Department {
    /// All departments in code order.
    pub fn all() -> &'static [Department] {
        &[Self::Establishment, Self::CivilAffairs, Self::Industry, Self::Other]
    }

    /// Resolve a department from its code character.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(Self::Establishment),
            '5' => Some(Self::CivilAffairs),
            '9' => Some(Self::Industry),
            'Y' => Some(Self::Other),
            _ => None,
        }
    }

    /// The code character.
    pub fn code(&self) -> char {
        match self {
            Self::Establishment => '1',
            Self::CivilAffairs => '5',
            Self::Industry => '9',
            Self::Other => 'Y',
        }
    }

    /// Department name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Establishment => "机构编制",
            Self::CivilAffairs => "民政",
            Self::Industry => "工商",
            Self::Other => "其它",
        }
    }

    /// Categories registered under this department.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Establishment => &ESTABLISHMENT,
            Self::CivilAffairs => &CIVIL_AFFAIRS,
            Self::Industry => &INDUSTRY,
            Self::Other => &OTHER,
        }
    }

    /// The registered category with the given code, if any.
    pub fn category(&self, code: char) -> Option<&'static Category> {
        self.categories().iter().find(|c| c.code == code)
    }

    /// Name of the registered category with the given code.
    pub fn category_name(&self, code: char) -> Option<&'static str> {
        self.category(code).map(|c| c.name)
    }

    /// Whether `code` is registered under this department.
    pub fn allows_category(&self, code: char) -> bool {
        self.category(code).is_some()
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}
