use folio_site::content::{CERTIFICATIONS, GALLERY_IMAGES};
use folio_site::core::lightbox::{ClickTarget, Key};
use folio_site::domain::model::{GalleryImage, LightboxItem};
use folio_site::{CategoryFilter, Lightbox};

fn gallery() -> Lightbox<GalleryImage> {
    Lightbox::new(GALLERY_IMAGES.to_vec())
}

#[test]
fn test_filtered_list_is_exact_category_subset() {
    let mut lb = gallery();
    let categories: Vec<String> = lb.categories().iter().map(|c| c.to_string()).collect();

    for label in &categories {
        lb.set_filter(CategoryFilter::from_label(label));
        let visible: Vec<&str> = lb.visible().iter().map(|img| img.url).collect();
        let expected: Vec<&str> = GALLERY_IMAGES
            .iter()
            .filter(|img| label == "All" || img.category == label)
            .map(|img| img.url)
            .collect();
        assert_eq!(visible, expected, "filter {}", label);
    }
}

#[test]
fn test_next_then_previous_returns_to_start_for_every_filter() {
    let mut lb = gallery();
    let categories: Vec<String> = lb.categories().iter().map(|c| c.to_string()).collect();

    for label in &categories {
        lb.set_filter(CategoryFilter::from_label(label));
        let urls: Vec<&'static str> = lb.visible().iter().map(|img| img.url).collect();
        for url in urls {
            lb.open(url);
            lb.next();
            lb.previous();
            assert_eq!(lb.selected().map(|i| i.url), Some(url));

            lb.previous();
            lb.next();
            assert_eq!(lb.selected().map(|i| i.url), Some(url));
        }
    }
}

#[test]
fn test_single_item_filter_is_noop_both_ways() {
    let mut lb = gallery();
    lb.set_filter(CategoryFilter::from_label("Achievement"));
    assert_eq!(lb.visible().len(), 1);

    let only = lb.visible()[0].url;
    lb.open(only);
    lb.next();
    assert_eq!(lb.selected().map(|i| i.url), Some(only));
    lb.previous();
    assert_eq!(lb.selected().map(|i| i.url), Some(only));
}

#[test]
fn test_wraparound_over_full_list() {
    let mut lb = gallery();
    let last = GALLERY_IMAGES.last().unwrap().url;
    let first = GALLERY_IMAGES[0].url;

    lb.open(last);
    lb.handle_key(Key::ArrowRight);
    assert_eq!(lb.selected().map(|i| i.url), Some(first));
    lb.handle_key(Key::ArrowLeft);
    assert_eq!(lb.selected().map(|i| i.url), Some(last));
}

#[test]
fn test_keys_ignored_when_closed_and_after_unmount() {
    let mut lb = gallery();
    lb.handle_key(Key::ArrowRight);
    assert!(!lb.is_open());

    lb.open(GALLERY_IMAGES[1].url);
    lb.unmount();
    assert!(!lb.is_listening());
    lb.handle_key(Key::ArrowRight);
    assert!(lb.selected().is_none());
}

#[test]
fn test_close_button_and_backdrop_close() {
    let mut lb = gallery();
    lb.open(GALLERY_IMAGES[0].url);
    lb.handle_click(ClickTarget::CloseButton);
    assert!(!lb.is_open());

    lb.open(GALLERY_IMAGES[0].url);
    lb.handle_click(ClickTarget::Previous);
    assert!(lb.is_open());
    lb.handle_click(ClickTarget::Backdrop);
    assert!(!lb.is_open());
}

#[test]
fn test_certificates_filter_by_issuer() {
    let mut lb = Lightbox::new(CERTIFICATIONS.to_vec());
    assert_eq!(lb.categories(), vec!["All", "GUVI (IIT Madras)", "Alison"]);

    lb.set_filter(CategoryFilter::from_label("Alison"));
    assert!(lb.visible().iter().all(|c| c.category() == "Alison"));
    assert_eq!(lb.visible().len(), CERTIFICATIONS.len() - 1);
}

#[test]
fn test_source_list_change_recomputes_filter() {
    let mut lb = gallery();
    lb.set_filter(CategoryFilter::from_label("Site"));
    assert_eq!(lb.visible().len(), 2);

    lb.set_items(GALLERY_IMAGES[..2].to_vec());
    assert_eq!(lb.visible().len(), 1);
}
