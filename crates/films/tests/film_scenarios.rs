//! End-to-end construction scenarios against the public crate surface.

use std::collections::HashSet;

use chrono::NaiveDate;
use filmdex_core::{DomainError, DomainResult, EntityId};
use filmdex_films::{Film, FilmId};

/// Build a film and surface failures at the shared domain-error layer, the
/// way an application-facing caller would hold them.
fn catalog_film(
    id: FilmId,
    title: &str,
    director: &str,
    release_date: NaiveDate,
    rating: f64,
) -> DomainResult<Film> {
    let film = Film::create(
        id,
        title.to_string(),
        director.to_string(),
        release_date,
        rating,
    )?;
    Ok(film)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn catalog_deduplicates_films_by_identity() {
    filmdex_observability::init();
    tracing::info!("scenario: catalog deduplication");

    let shared_id = FilmId::new(EntityId::new());
    let mut catalog = HashSet::new();

    catalog.insert(
        catalog_film(shared_id, "Citizen Kane", "Orson Welles", date(1941, 5, 1), 4.8).unwrap(),
    );
    // Same identity, different metadata: still the same entity.
    catalog.insert(
        catalog_film(shared_id, "Citizen Kane (restored)", "Orson Welles", date(1941, 5, 1), 4.9)
            .unwrap(),
    );
    catalog.insert(
        catalog_film(
            FilmId::new(EntityId::new()),
            "The Third Man",
            "Carol Reed",
            date(1949, 8, 31),
            4.5,
        )
        .unwrap(),
    );

    assert_eq!(catalog.len(), 2);
}

#[test]
fn invalid_films_surface_domain_validation_errors() {
    filmdex_observability::init();
    tracing::info!("scenario: invalid input surfaces a domain error");

    let err = catalog_film(
        FilmId::new(EntityId::new()),
        "   ",
        "Orson Welles",
        date(1941, 5, 1),
        4.8,
    )
    .unwrap_err();

    assert_eq!(
        err,
        DomainError::Validation("film title must not be blank".to_string())
    );
}

#[test]
fn rejected_films_never_enter_the_catalog() {
    filmdex_observability::init();
    tracing::info!("scenario: failed construction leaves no partial state");

    let mut catalog: HashSet<Film> = HashSet::new();

    let attempt = catalog_film(
        FilmId::new(EntityId::new()),
        "Citizen Kane",
        "Orson Welles",
        date(1800, 1, 1),
        4.8,
    );

    if let Ok(film) = attempt {
        catalog.insert(film);
    }

    assert!(catalog.is_empty());
}
