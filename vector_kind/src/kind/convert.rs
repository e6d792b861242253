//! Kind conversion methods (from_str, as_str)

use std::str::FromStr;

use super::Kind;
use crate::error::KindError;

impl FromStr for Kind {
    type Err = KindError;

    /// Parse a kind from its lowercase name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "null" => Kind::Null,
            "logical" => Kind::Logical,
            "integer" => Kind::Integer,
            "double" => Kind::Double,
            "complex" => Kind::Complex,
            "character" => Kind::Character,
            "raw" => Kind::Raw,
            "list" => Kind::List,
            "dataframe" => Kind::DataFrame,
            "s3" => Kind::S3,
            "scalar" => Kind::Scalar,
            _ => return Err(KindError::UnknownKindName(s.to_string())),
        })
    }
}

impl Kind {
    /// Lowercase name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Logical => "logical",
            Kind::Integer => "integer",
            Kind::Double => "double",
            Kind::Complex => "complex",
            Kind::Character => "character",
            Kind::Raw => "raw",
            Kind::List => "list",
            Kind::DataFrame => "dataframe",
            Kind::S3 => "s3",
            Kind::Scalar => "scalar",
        }
    }
}
