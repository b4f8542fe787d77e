use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use filmdex_core::{DomainError, Entity, EntityId};

/// Film identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(pub EntityId);

impl FilmId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for FilmId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

// Length limits are in characters, not bytes.
const MAX_TITLE_CHARS: usize = 100;
const MAX_DIRECTOR_CHARS: usize = 100;

/// Year of the first public film screening; releases cannot predate it.
const EARLIEST_RELEASE: NaiveDate = match NaiveDate::from_ymd_opt(1895, 1, 1) {
    Some(date) => date,
    None => panic!("1895-01-01 is a valid calendar date"),
};

const MIN_RATING: f64 = 0.0;
const MAX_RATING: f64 = 5.0;

/// Validation failure raised by [`Film::create`].
///
/// Each kind carries a fixed, human-readable message. Checks run in a fixed
/// order and the first failure wins, so a single kind is reported even when
/// several fields are invalid.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum FilmError {
    #[error("film title must not be blank")]
    BlankTitle,

    #[error("film title must be at most 100 characters")]
    TitleTooLong,

    #[error("film director must not be blank")]
    BlankDirector,

    #[error("film director must be at most 100 characters")]
    DirectorTooLong,

    #[error("film release date must be on or after 1895-01-01")]
    ReleaseDateTooEarly,

    #[error("film rating must be between zero and five")]
    RatingOutOfRange,
}

impl From<FilmError> for DomainError {
    fn from(err: FilmError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Entity: a validated film record.
///
/// Fields are fixed at construction; there is no mutation path, so the
/// invariants checked by [`Film::create`] hold for the value's whole
/// lifetime.
#[derive(Debug, Clone)]
pub struct Film {
    id: FilmId,
    title: String,
    director: String,
    release_date: NaiveDate,
    rating: f64,
}

impl Film {
    /// Validating factory.
    ///
    /// Caller-supplied ids are not checked for uniqueness.
    pub fn create(
        id: FilmId,
        title: String,
        director: String,
        release_date: NaiveDate,
        rating: f64,
    ) -> Result<Self, FilmError> {
        if title.trim().is_empty() {
            return Err(FilmError::BlankTitle);
        }

        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(FilmError::TitleTooLong);
        }

        if director.trim().is_empty() {
            return Err(FilmError::BlankDirector);
        }

        if director.chars().count() > MAX_DIRECTOR_CHARS {
            return Err(FilmError::DirectorTooLong);
        }

        if release_date < EARLIEST_RELEASE {
            return Err(FilmError::ReleaseDateTooEarly);
        }

        // NaN falls outside the range and is rejected with the other
        // out-of-range ratings.
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FilmError::RatingOutOfRange);
        }

        Ok(Self {
            id,
            title,
            director,
            release_date,
            rating,
        })
    }

    pub fn id_typed(&self) -> FilmId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}

impl Entity for Film {
    type Id = FilmId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// Films are compared and hashed by identity, never by field values.
impl PartialEq for Film {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Film {}

impl core::hash::Hash for Film {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
