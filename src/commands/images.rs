use colored::*;
use k8s_openapi::api::core::v1::Pod;

use crate::errors::Error;
use crate::images;
use crate::k8s::PodLister;
use crate::models::ImageRow;
use crate::table::{self, HEADERS};
use crate::utils;

pub async fn run<L: PodLister>(lister: &L, namespace: Option<&str>) -> Result<(), Error> {
    let pb = utils::create_spinner("Fetching pods...");
    let pods = fetch_pods(lister, namespace).await;
    pb.finish_and_clear();

    let rows = images::build_rows(&pods?);
    tracing::debug!(rows = rows.len(), "rendering image table");

    let pods_header = HEADERS.0.cyan().bold().to_string();
    let images_header = HEADERS.1.magenta().bold().to_string();
    let table = table::render(&decorate(rows), (&pods_header, &images_header));
    println!("{table}");
    Ok(())
}

// SCOPE RESOLUTION
async fn fetch_pods<L: PodLister>(lister: &L, namespace: Option<&str>) -> Result<Vec<Pod>, Error> {
    match namespace {
        Some(ns) => lister.list_namespaced(ns).await,
        None => lister.list_all().await,
    }
}

// Presentation only. Rows stay plain until this point so the renderer
// measures the undecorated text.
fn decorate(rows: Vec<ImageRow>) -> Vec<ImageRow> {
    rows.into_iter()
        .map(|r| ImageRow {
            pod: r.pod.cyan().to_string(),
            images: r.images.magenta().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1::{Container, PodSpec};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    use super::*;

    fn pod(name: &str, namespace: &str, image: &str) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..ObjectMeta::default()
            },
            spec: Some(PodSpec {
                containers: vec![Container {
                    name: "app".to_string(),
                    image: Some(image.to_string()),
                    ..Container::default()
                }],
                ..PodSpec::default()
            }),
            ..Pod::default()
        }
    }

    fn query_error() -> Error {
        Error::ClusterQuery(kube::Error::Service("connection refused".into()))
    }

    struct FakeLister {
        all: Vec<Pod>,
        scoped: Vec<Pod>,
        fail: bool,
    }

    impl PodLister for FakeLister {
        async fn list_all(&self) -> Result<Vec<Pod>, Error> {
            if self.fail {
                return Err(query_error());
            }
            Ok(self.all.clone())
        }

        async fn list_namespaced(&self, namespace: &str) -> Result<Vec<Pod>, Error> {
            if self.fail {
                return Err(query_error());
            }
            Ok(self
                .scoped
                .iter()
                .filter(|p| p.metadata.namespace.as_deref() == Some(namespace))
                .cloned()
                .collect())
        }
    }

    fn fake() -> FakeLister {
        let a = pod("a", "team-a", "img-x:1.0");
        let b = pod("b", "team-b", "img-y:2.0");
        FakeLister {
            all: vec![a.clone(), b.clone()],
            scoped: vec![a, b],
            fail: false,
        }
    }

    #[tokio::test]
    async fn no_namespace_lists_everything() {
        let pods = fetch_pods(&fake(), None).await.unwrap();
        assert_eq!(pods.len(), 2);
    }

    #[tokio::test]
    async fn namespace_scopes_the_listing() {
        let lister = fake();
        let scoped = fetch_pods(&lister, Some("team-a")).await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].metadata.name.as_deref(), Some("a"));

        // Scoped results stay a subset of the unscoped listing
        let all = fetch_pods(&lister, None).await.unwrap();
        let names: Vec<_> = all.iter().filter_map(|p| p.metadata.name.clone()).collect();
        assert!(scoped
            .iter()
            .all(|p| names.contains(&p.metadata.name.clone().unwrap())));
    }

    #[tokio::test]
    async fn unknown_namespace_yields_empty_listing() {
        let pods = fetch_pods(&fake(), Some("nope")).await.unwrap();
        assert!(pods.is_empty());
    }

    #[tokio::test]
    async fn query_failure_propagates_without_output() {
        let lister = FakeLister { fail: true, ..fake() };
        let res = run(&lister, None).await;
        assert!(matches!(res, Err(Error::ClusterQuery(_))));
    }

    #[tokio::test]
    async fn row_count_matches_pod_count() {
        let pods = fetch_pods(&fake(), None).await.unwrap();
        let rows = images::build_rows(&pods);
        assert_eq!(rows.len(), pods.len());

        let out = table::render(&rows, HEADERS);
        let data_lines = out.lines().filter(|l| l.contains('|')).count();
        assert_eq!(data_lines, pods.len() + 1);
    }
}
