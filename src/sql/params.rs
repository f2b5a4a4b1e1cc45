//! Bind values for builder-produced queries.

use chrono::{DateTime, Utc};
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// A value bound to a `$n` placeholder. Each variant reports its own PostgreSQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl From<i32> for SqlParam {
    fn from(n: i32) -> Self {
        SqlParam::Int(n)
    }
}

impl From<&str> for SqlParam {
    fn from(s: &str) -> Self {
        SqlParam::Text(s.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(s: String) -> Self {
        SqlParam::Text(s)
    }
}

impl From<DateTime<Utc>> for SqlParam {
    fn from(t: DateTime<Utc>) -> Self {
        SqlParam::Timestamp(t)
    }
}

impl<'q> Encode<'q, Postgres> for SqlParam {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqlParam::Int(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            SqlParam::Text(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)?
            }
            SqlParam::Timestamp(t) => <DateTime<Utc> as Encode<Postgres>>::encode_by_ref(t, buf)?,
        })
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            SqlParam::Int(_) => PgTypeInfo::with_name("INT4"),
            SqlParam::Text(_) => PgTypeInfo::with_name("TEXT"),
            SqlParam::Timestamp(_) => PgTypeInfo::with_name("TIMESTAMPTZ"),
        })
    }
}

impl sqlx::Type<Postgres> for SqlParam {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}
