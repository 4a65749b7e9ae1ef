use super::*;

#[test]
fn priority_images_load_eagerly_with_high_fetch_priority() {
    assert_eq!(ImageLoading::for_priority(true), ImageLoading { loading: "eager", fetch_priority: "high" });
}

#[test]
fn other_images_load_lazily() {
    assert_eq!(ImageLoading::for_priority(false), ImageLoading { loading: "lazy", fetch_priority: "auto" });
}
