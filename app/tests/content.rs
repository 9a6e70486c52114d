use app::content::{Error, Platform, Site, MANIFEST_SHORT_NAME_MAX_LEN};
use std::path::{Path, PathBuf};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn load_bundled_content() {
    setup();

    let site = Site::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../content")).unwrap();
    assert_eq!("David Asaf", site.config.author.name);
    assert!(site.config.manifest.short_name.chars().count() <= MANIFEST_SHORT_NAME_MAX_LEN);
    assert_eq!(
        Some("https://www.github.com/davideasaf"),
        site.config.social_link(Platform::Github)
    );
    assert_eq!("/images/hero-desktop.svg", site.backgrounds.desktop);
    assert_eq!("1.8s", site.theme.time.duration.long);
}

#[test]
fn missing_theme_token_fails_the_load() {
    setup();

    match Site::load(&data("missing_token")) {
        Err(Error::Deserialize { error, path }) => {
            assert!(path.ends_with("theme.yml"), "{path:?}");
            assert!(error.contains("time"), "{error}");
        }
        other => panic!("expected a deserialize error, got {other:?}"),
    }
}

#[test]
fn unknown_platform_fails_the_load() {
    setup();

    match Site::load(&data("unknown_platform")) {
        Err(Error::Deserialize { path, .. }) => assert!(path.ends_with("site.yml"), "{path:?}"),
        other => panic!("expected a deserialize error, got {other:?}"),
    }
}

#[test]
fn long_manifest_short_name_fails_the_load() {
    setup();

    match Site::load(&data("long_short_name")) {
        Err(Error::Invalid { error, .. }) => assert!(error.contains("DavidEmmanuelAsaf"), "{error}"),
        other => panic!("expected an invalid configuration error, got {other:?}"),
    }
}

#[test]
fn missing_social_link_still_loads() {
    setup();

    let site = Site::load(&data("no_github")).unwrap();
    assert_eq!(None, site.config.social_link(Platform::Github));
    assert!(site.config.social_link(Platform::Twitter).is_some());
}

#[test]
fn missing_directory_is_an_io_error() {
    setup();

    match Site::load(&data("does_not_exist")) {
        Err(error @ Error::IO { .. }) => {
            assert!(error.to_string().starts_with("Could not read"), "{error}")
        }
        other => panic!("expected an IO error, got {other:?}"),
    }
}

#[test]
fn markup_in_theme_token_fails_the_load() {
    setup();

    match Site::load(&data("markup_in_theme")) {
        Err(Error::Invalid { error, path }) => {
            assert!(path.ends_with("theme.yml"), "{path:?}");
            assert!(error.contains("time.duration.long"), "{error}");
        }
        other => panic!("expected an invalid configuration error, got {other:?}"),
    }
}

#[test]
fn markup_in_background_fails_the_load() {
    setup();

    match Site::load(&data("markup_in_background")) {
        Err(Error::Invalid { error, path }) => {
            assert!(path.ends_with("backgrounds.yml"), "{path:?}");
            assert!(error.contains("mobile"), "{error}");
        }
        other => panic!("expected an invalid configuration error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_site_serves_the_site_in_context() {
    use app::pages::home::get_site;
    use leptos::prelude::{provide_context, Owner};
    use std::sync::Arc;

    setup();

    let site = Site::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../content")).unwrap();
    let owner = Owner::new();
    owner.set();
    provide_context(Arc::new(site.clone()));
    assert_eq!(site, get_site().await.unwrap());
}

#[tokio::test]
async fn get_site_fails_without_a_site_in_context() {
    use app::pages::home::get_site;
    use leptos::prelude::Owner;

    setup();

    let owner = Owner::new();
    owner.set();
    let error = get_site().await.unwrap_err();
    assert!(error.to_string().contains("missing from the context"), "{error}");
}
