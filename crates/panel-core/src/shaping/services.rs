use crate::service::{ServiceDescriptor, ServiceInstance};

/// One record per descriptor that has at least one bound instance, naming its
/// first instance.
pub fn flatten_service_instances(services: &[ServiceDescriptor]) -> Vec<ServiceInstance> {
    services
        .iter()
        .filter_map(|descriptor| {
            descriptor.instances.first().map(|first| ServiceInstance {
                name: first.clone(),
                servicename: descriptor.service.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(service: &str, instances: &[&str]) -> ServiceDescriptor {
        ServiceDescriptor {
            service: service.to_string(),
            instances: instances.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_descriptors_are_skipped() {
        let services = vec![
            descriptor("mysql", &["db-prod", "db-stage"]),
            descriptor("redis", &[]),
            descriptor("mongodb", &["docs"]),
        ];

        let flat = flatten_service_instances(&services);

        assert_eq!(
            flat,
            vec![
                ServiceInstance {
                    name: "db-prod".to_string(),
                    servicename: "mysql".to_string()
                },
                ServiceInstance {
                    name: "docs".to_string(),
                    servicename: "mongodb".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_descriptor_without_instances_key() {
        let parsed: Vec<ServiceDescriptor> =
            serde_json::from_str(r#"[{"service": "redis"}]"#).unwrap();
        assert!(flatten_service_instances(&parsed).is_empty());
    }
}
