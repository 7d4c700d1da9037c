use crate::app::{Container, Unit};

/// Copies host placement from containers onto the units they back.
///
/// A container matches a unit when its `ID` equals the unit's `Name`. Units
/// without a matching container are left untouched.
pub fn merge_containers(units: &mut [Unit], containers: &[Container]) {
    for container in containers {
        for unit in units.iter_mut().filter(|u| u.name == container.id) {
            unit.host_addr = container.host_addr.clone();
            unit.host_port = container.host_port.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unit(name: &str) -> Unit {
        serde_json::from_value(json!({"Name": name, "Status": "started"})).unwrap()
    }

    fn container(id: &str, addr: &str, port: &str) -> Container {
        serde_json::from_value(json!({"ID": id, "HostAddr": addr, "HostPort": port, "Image": "tsuru/g1"}))
            .unwrap()
    }

    #[test]
    fn test_matching_units_get_host_placement() {
        let mut units = vec![unit("u1"), unit("u2"), unit("u3")];
        let containers = vec![
            container("u3", "10.0.0.3", "49155"),
            container("u1", "10.0.0.1", "49153"),
            container("gone", "10.0.0.9", "49999"),
        ];

        merge_containers(&mut units, &containers);

        assert_eq!(units[0].host_addr, Some(json!("10.0.0.1")));
        assert_eq!(units[0].host_port, Some(json!("49153")));
        assert_eq!(units[2].host_addr, Some(json!("10.0.0.3")));
        assert_eq!(units[1], unit("u2"));
    }

    #[test]
    fn test_other_unit_fields_are_preserved() {
        let mut units = vec![unit("u1")];
        merge_containers(&mut units, &[container("u1", "10.0.0.1", "49153")]);

        let shaped = serde_json::to_value(&units[0]).unwrap();
        assert_eq!(
            shaped,
            json!({"Name": "u1", "Status": "started", "HostAddr": "10.0.0.1", "HostPort": "49153"})
        );
    }

    #[test]
    fn test_no_containers_is_a_no_op() {
        let mut units = vec![unit("u1")];
        merge_containers(&mut units, &[]);
        assert_eq!(units, vec![unit("u1")]);
    }
}
