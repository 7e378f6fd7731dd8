use hoist_core::{ImageReferences, LOCAL_TAG};
use proptest::prelude::*;

#[test]
fn compose_matches_ecr_naming() {
    let refs = ImageReferences::compose("123456789012", "us-east-1", "zip-map-processor", "latest");

    assert_eq!(
        refs.registry_uri,
        "123456789012.dkr.ecr.us-east-1.amazonaws.com/zip-map-processor"
    );
    assert_eq!(
        refs.image_ref,
        "123456789012.dkr.ecr.us-east-1.amazonaws.com/zip-map-processor:latest"
    );
    assert_eq!(refs.local_image, "zip-map-processor:latest");
}

#[test]
fn local_image_ignores_remote_tag() {
    let refs = ImageReferences::compose("123456789012", "us-east-1", "zip-map-processor", "v7");

    assert!(refs.image_ref.ends_with(":v7"));
    assert_eq!(refs.local_image, "zip-map-processor:latest");
    assert_eq!(LOCAL_TAG, "latest");
}

#[test]
fn compose_does_not_validate() {
    let refs = ImageReferences::compose("", "", "Bad Name", "");

    assert_eq!(refs.registry_uri, ".dkr.ecr..amazonaws.com/Bad Name");
    assert_eq!(refs.image_ref, ".dkr.ecr..amazonaws.com/Bad Name:");
}

#[test]
fn display_lists_every_reference() {
    let refs = ImageReferences::compose("111122223333", "eu-west-1", "svc", "latest");
    let out = refs.to_string();

    assert!(out.contains("111122223333.dkr.ecr.eu-west-1.amazonaws.com/svc"));
    assert!(out.contains("svc:latest"));
}

proptest! {
    #[test]
    fn compose_is_plain_concatenation(
        account in "[0-9]{12}",
        region in "[a-z]{2}-[a-z]{4,9}-[1-9]",
        repo in "[a-z0-9][a-z0-9._/-]{0,40}",
        tag in "[A-Za-z0-9_.-]{1,20}",
    ) {
        let refs = ImageReferences::compose(&account, &region, &repo, &tag);

        prop_assert_eq!(
            &refs.registry_uri,
            &format!("{account}.dkr.ecr.{region}.amazonaws.com/{repo}")
        );
        prop_assert_eq!(&refs.image_ref, &format!("{}:{tag}", refs.registry_uri));
        prop_assert_eq!(&refs.local_image, &format!("{repo}:latest"));
    }
}
