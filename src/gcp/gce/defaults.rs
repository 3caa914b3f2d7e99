//! # GCE Instance Default Configuration
//!
//! The command template used when no template file is given, plus the helpers
//! that derive per-batch resource names. The VM runs the galexie container in
//! `append` mode over `[start, end]`, reading its config from a regional disk
//! created ahead of time for each batch.

/// Instance names are this prefix followed by the 1-based batch number.
pub const DEFAULT_INSTANCE_PREFIX: &str = "galexie-pubnet-custom-config-";

/// Separator placed between consecutive commands in the output block.
pub const COMMAND_SEPARATOR: &str = ";\n\n";

/// Handlebars template of the `gcloud` command. Renders to a single line.
///
/// Placeholders: `instance_name`, `gcp_project`, `zone`, `service_account`,
/// `start`, `end`, `batch_num`.
pub const DEFAULT_TEMPLATE: &str = "gcloud compute instances create-with-container {{instance_name}} \
--project={{gcp_project}} \
--zone={{zone}} \
--machine-type=e2-standard-2 \
--network-interface=network-tier=PREMIUM,stack-type=IPV4_ONLY,subnet=default \
--maintenance-policy=MIGRATE \
--provisioning-model=STANDARD \
--service-account={{service_account}} \
--scopes=https://www.googleapis.com/auth/cloud-platform \
--image=projects/cos-cloud/global/images/cos-stable-113-18244-85-29 \
--boot-disk-size=10GB \
--boot-disk-type=pd-balanced \
--boot-disk-device-name=galexie-pubnet-custom-config \
--container-image=stellar/stellar-galexie:1.0.0 \
--container-restart-policy=always \
--container-privileged \
--container-command=galexie \
--container-arg=append \
--container-arg=--config-file \
--container-arg=/mnt/galexie-config-pubnet/config-pubnet.toml \
--container-arg=--start \
--container-arg={{start}} \
--container-arg=--end \
--container-arg={{end}} \
--container-mount-disk=mode=rw,mount-path=/mnt/galexie-config-pubnet,name=galexie-config-pubnet-batch-{{batch_num}},partition=0 \
--disk=boot=no,device-name=galexie-config-pubnet-batch-{{batch_num}},mode=rw,name=galexie-config-pubnet-batch-{{batch_num}},scope=regional \
--no-shielded-secure-boot \
--shielded-vtpm \
--shielded-integrity-monitoring \
--labels=goog-ec-src=vm_add-gcloud,container-vm=cos-stable-113-18244-85-29";

/// Name of the VM for batch `batch_num`.
pub fn instance_name(prefix: &str, batch_num: u64) -> String {
    format!("{}{}", prefix, batch_num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_one_line() {
        assert!(!DEFAULT_TEMPLATE.contains('\n'));
        assert!(!DEFAULT_TEMPLATE.contains("  "));
        assert!(DEFAULT_TEMPLATE.starts_with("gcloud compute instances create-with-container "));
    }

    #[test]
    fn instance_names() {
        assert_eq!(
            instance_name(DEFAULT_INSTANCE_PREFIX, 7),
            "galexie-pubnet-custom-config-7"
        );
    }
}
