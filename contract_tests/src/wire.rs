//! Twin protocol wire contract
//!
//! Canonical command tags and serialized payload shapes.

// ===== Command tags =====
pub const EXIT: &str = "space.exit";
pub const LOG: &str = "space.log";
pub const EVAL: &str = "space.eval";
pub const INSTANTIATE: &str = "twin.instantiate";
pub const INVOKE: &str = "twin.invoke";
pub const INVENTORY: &str = "space.inventory";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use twin_proto::{
        pack, unpack, ArgValue, CodecError, Command, InvocationDescriptor, Message,
        SchemaVersion, TwinDescriptor, TWIN_SCHEMA_VERSION,
    };
    use twin_types::TwinId;
    use uuid::Uuid;

    fn fixed_id() -> TwinId {
        TwinId::from_uuid(Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0))
    }

    #[test]
    fn test_command_tags_are_stable() {
        assert_eq!(pack(Command::Exit).unwrap().command, EXIT);
        assert_eq!(pack(Command::Log(json!(null))).unwrap().command, LOG);
        assert_eq!(pack(Command::Eval(json!(null))).unwrap().command, EVAL);
        assert_eq!(
            pack(Command::Instantiate(TwinDescriptor::new("Probe", fixed_id())))
                .unwrap()
                .command,
            INSTANTIATE
        );
        assert_eq!(
            pack(Command::Invoke(InvocationDescriptor::new(
                fixed_id(),
                "m",
                vec![]
            )))
            .unwrap()
            .command,
            INVOKE
        );
        assert_eq!(pack(Command::Inventory).unwrap().command, INVENTORY);
    }

    #[test]
    fn test_schema_version_is_v1() {
        assert_eq!(TWIN_SCHEMA_VERSION, SchemaVersion::new(1, 0));
    }

    #[test]
    fn test_message_envelope_shape() {
        let message = pack(Command::Exit).unwrap();
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "command": "space.exit",
                "version": {"major": 1, "minor": 0},
                "payload": null,
            })
        );
    }

    #[test]
    fn test_instantiate_payload_shape() {
        let message = pack(Command::Instantiate(TwinDescriptor::new(
            "Probe",
            fixed_id(),
        )))
        .unwrap();
        assert_eq!(
            message.payload,
            json!({
                "class_name": "Probe",
                "id": "12345678-9abc-def0-1234-56789abcdef0",
            })
        );
    }

    #[test]
    fn test_invoke_payload_shape() {
        let message = pack(Command::Invoke(InvocationDescriptor::new(
            fixed_id(),
            "print_test",
            vec![
                ArgValue::Data(json!("Hello")),
                ArgValue::TwinRef(fixed_id()),
            ],
        )))
        .unwrap();
        assert_eq!(
            message.payload,
            json!({
                "id": "12345678-9abc-def0-1234-56789abcdef0",
                "method": "print_test",
                "args": [
                    {"Data": "Hello"},
                    {"TwinRef": "12345678-9abc-def0-1234-56789abcdef0"},
                ],
            })
        );
    }

    #[test]
    fn test_decode_from_raw_json() {
        // A message assembled by another implementation of the protocol.
        let raw = json!({
            "command": "twin.invoke",
            "version": {"major": 1, "minor": 3},
            "payload": {
                "id": "12345678-9abc-def0-1234-56789abcdef0",
                "method": "print_test",
                "args": [{"Data": ["nested", {"record": true}]}],
            },
        });
        let message: Message = serde_json::from_value(raw).unwrap();
        let command = unpack(&message).unwrap();
        match command {
            Command::Invoke(invocation) => {
                assert_eq!(invocation.id, fixed_id());
                assert_eq!(invocation.method, "print_test");
                assert_eq!(invocation.args.len(), 1);
            }
            other => panic!("expected invoke, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let message = Message {
            command: "twin.destroy".to_string(),
            version: TWIN_SCHEMA_VERSION,
            payload: json!(null),
        };
        assert!(matches!(
            unpack(&message).unwrap_err(),
            CodecError::UnknownCommand(_)
        ));
    }

    #[test]
    fn test_minor_version_drift_is_accepted() {
        let mut message = pack(Command::Inventory).unwrap();
        message.version = SchemaVersion::new(TWIN_SCHEMA_VERSION.major, 9);
        assert_eq!(unpack(&message).unwrap(), Command::Inventory);
    }

    #[test]
    fn test_major_version_drift_is_rejected() {
        let mut message = pack(Command::Inventory).unwrap();
        message.version = SchemaVersion::new(TWIN_SCHEMA_VERSION.major + 1, 0);
        assert!(matches!(
            unpack(&message).unwrap_err(),
            CodecError::SchemaMismatch { .. }
        ));
    }
}
