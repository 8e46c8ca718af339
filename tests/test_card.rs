//! Integration tests for the detail card state and image loading.

mod common;

use common::*;
use solarmap::core::card::{
    FALLBACK_IMAGE_URL, GRID_STATUS, STATUS_BADGE, TECHNOLOGY_LABEL, present,
};
use solarmap::core::imagery::{ImageLoadError, load_image};

#[test]
fn test_nothing_selected() {
    assert!(present(None, &CardState::default()).is_none());
}

#[test]
fn test_present_project() {
    let catalog = sample_catalog();
    let project = catalog.get("gamma").expect("gamma");
    let mut state = CardState::default();
    assert!(state.sync(Some(project)));

    let view = present(Some(project), &state).expect("card should render");
    assert_eq!(view.title, "GAMMA Solar");
    assert_eq!(view.location, "Somewhere, Atlantis");
    assert_eq!(view.capacity, "120");
    assert_eq!(view.capacity_unit, "MW");
    assert_eq!(view.technology, TECHNOLOGY_LABEL);
    assert_eq!(view.grid, GRID_STATUS);
    assert_eq!(view.status, STATUS_BADGE);
    assert_eq!(
        view.image,
        CardImage::Primary {
            url: "images/gamma.jpg".to_string()
        }
    );
}

#[test]
fn test_image_failure_switches_to_fallback() {
    let catalog = sample_catalog();
    let project = catalog.get("alpha").expect("alpha");
    let mut state = CardState::default();
    state.sync(Some(project));

    assert!(state.mark_image_failed("alpha"));
    let view = present(Some(project), &state).expect("card should render");
    assert!(view.image.is_fallback());
    assert_eq!(view.image.url(), FALLBACK_IMAGE_URL);
    assert_eq!(
        view.image,
        CardImage::Fallback {
            url: FALLBACK_IMAGE_URL.to_string(),
            notice: "Image not found: images/alpha.jpg".to_string(),
        }
    );
}

#[test]
fn test_new_project_resets_failure() {
    let catalog = sample_catalog();
    let alpha = catalog.get("alpha").expect("alpha");
    let beta = catalog.get("beta").expect("beta");
    let mut state = CardState::default();

    state.sync(Some(alpha));
    state.mark_image_failed("alpha");
    assert!(state.image_failed());

    // Same project again keeps the flag
    assert!(!state.sync(Some(alpha)));
    assert!(state.image_failed());

    assert!(state.sync(Some(beta)));
    assert!(!state.image_failed());
    let view = present(Some(beta), &state).expect("card should render");
    assert!(!view.image.is_fallback());
}

#[test]
fn test_stale_failure_ignored() {
    let catalog = sample_catalog();
    let mut state = CardState::default();
    state.sync(catalog.get("beta"));

    assert!(!state.mark_image_failed("alpha"));
    assert!(!state.image_failed());
}

#[test]
fn test_closing_clears_state() {
    let catalog = sample_catalog();
    let mut state = CardState::default();
    state.sync(catalog.get("alpha"));
    state.mark_image_failed("alpha");

    assert!(state.sync(None));
    assert_eq!(state.project_id(), None);
    assert!(!state.image_failed());
}

#[tokio::test]
async fn test_load_local_image() -> anyhow::Result<()> {
    let file = create_test_image();
    let location = file.path().to_string_lossy().to_string();

    let image = load_image(&location).await?;
    assert_eq!(image.dimensions(), (100, 100));
    assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);

    Ok(())
}

#[tokio::test]
async fn test_load_missing_image() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let location = dir.path().join("missing.jpg").to_string_lossy().to_string();

    let result = load_image(&location).await;
    assert!(matches!(result, Err(ImageLoadError::Io(_))));
}

#[tokio::test]
async fn test_load_undecodable_image() -> anyhow::Result<()> {
    let file = create_topology_file();
    let location = file.path().to_string_lossy().to_string();

    let result = load_image(&location).await;
    assert!(matches!(result, Err(ImageLoadError::Decode(_))));
    Ok(())
}

#[tokio::test]
async fn test_builtin_project_images_load() -> anyhow::Result<()> {
    let catalog = Catalog::builtin()?;
    for project in catalog.projects() {
        let image = load_image(&project.image_url).await?;
        let (width, height) = image.dimensions();
        assert!(width > 0 && height > 0, "{} decoded to an empty image", project.id);
    }
    Ok(())
}
