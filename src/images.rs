use k8s_openapi::api::core::v1::Pod;

use crate::models::ImageRow;

/// Image reference of every container in the pod, in manifest order.
/// Only the primary container set counts; init and ephemeral containers are
/// not part of the listing. No deduplication, no validation.
pub fn container_images(pod: &Pod) -> Vec<String> {
    pod.spec
        .as_ref()
        .map(|spec| {
            spec.containers
                .iter()
                .map(|c| c.image.clone().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

/// One row per pod, preserving the order the cluster returned them in.
pub fn build_rows(pods: &[Pod]) -> Vec<ImageRow> {
    pods.iter()
        .map(|p| {
            ImageRow::new(
                p.metadata.name.clone().unwrap_or_default(),
                container_images(p),
            )
        })
        .collect()
}
