//! The compiled-in class catalog of the UPnP SDK.

use crate::{ClassSchema, Member, MemberKind, Registry};

const IXML_H: &str = "ixml.h";
const INET_H: &str = "UpnpInet.h";

fn int(name: &str, type_name: &str) -> Member {
    Member::new(name, MemberKind::Integer).type_name(type_name)
}

fn doc(name: &str) -> Member {
    int(name, "IXML_Document *").header(IXML_H)
}

fn sockaddr(name: &str) -> Member {
    Member::new(name, MemberKind::Buffer)
        .type_name("struct sockaddr_storage")
        .header(INET_H)
}

fn string(name: &str) -> Member {
    Member::new(name, MemberKind::String)
}

fn dom_string(name: &str) -> Member {
    Member::new(name, MemberKind::DomString)
}

fn list(name: &str) -> Member {
    Member::new(name, MemberKind::List)
}

/// Build the built-in registry, in generation order.
pub fn registry() -> Registry {
    Registry::new(vec![
        ClassSchema::new(
            "UpnpActionComplete",
            vec![
                int("ErrCode", "int"),
                string("CtrlUrl"),
                doc("ActionRequest"),
                doc("ActionResult"),
            ],
        ),
        ClassSchema::new(
            "UpnpActionRequest",
            vec![
                int("ErrCode", "int"),
                int("Socket", "int"),
                string("ErrStr"),
                string("ActionName"),
                string("DevUDN"),
                string("ServiceID"),
                doc("ActionRequest"),
                doc("ActionResult"),
                doc("SoapHeader"),
                sockaddr("CtrlPtIPAddr"),
                string("Os"),
            ],
        ),
        ClassSchema::new(
            "UpnpDiscovery",
            vec![
                int("ErrCode", "int"),
                int("Expires", "int"),
                string("DeviceID"),
                string("DeviceType"),
                string("ServiceType"),
                string("ServiceVer"),
                string("Location"),
                string("Os"),
                string("Date"),
                string("Ext"),
                sockaddr("DestAddr"),
            ],
        ),
        ClassSchema::new(
            "UpnpEvent",
            vec![
                int("EventKey", "int"),
                doc("ChangedVariables"),
                string("SID"),
            ],
        ),
        ClassSchema::new(
            "UpnpEventSubscribe",
            vec![
                int("ErrCode", "int"),
                int("TimeOut", "int"),
                string("SID"),
                string("PublisherUrl"),
            ],
        ),
        ClassSchema::new(
            "UpnpExtraHeaders",
            vec![
                list("node"),
                string("name"),
                string("value"),
                dom_string("resp"),
            ],
        ),
        ClassSchema::new(
            "UpnpFileInfo",
            vec![
                int("FileLength", "off_t").header("<sys/types.h>"),
                int("LastModified", "time_t").header("<time.h>"),
                int("IsDirectory", "int"),
                int("IsReadable", "int"),
                dom_string("ContentType"),
                list("ExtraHeadersList"),
                sockaddr("CtrlPtIPAddr"),
                string("Os"),
            ],
        ),
        ClassSchema::new(
            "UpnpStateVarComplete",
            vec![
                int("ErrCode", "int"),
                string("CtrlUrl"),
                string("StateVarName"),
                dom_string("CurrentVal"),
            ],
        ),
        ClassSchema::new(
            "UpnpStateVarRequest",
            vec![
                int("ErrCode", "int"),
                int("Socket", "int"),
                string("ErrStr"),
                string("DevUDN"),
                string("ServiceID"),
                string("StateVarName"),
                sockaddr("CtrlPtIPAddr"),
                dom_string("CurrentVal"),
            ],
        ),
        ClassSchema::new(
            "UpnpSubscriptionRequest",
            vec![string("ServiceId"), string("UDN"), string("SID")],
        ),
        ClassSchema::new(
            "GenlibClientSubscription",
            vec![
                int("RenewEventId", "int"),
                string("SID"),
                string("ActualSID"),
                string("EventURL"),
                int("Next", "GenlibClientSubscription *"),
            ],
        ),
        ClassSchema::new(
            "SSDPResultData",
            vec![
                Member::new("Param", MemberKind::Class)
                    .type_name("UpnpDiscovery")
                    .header("UpnpDiscovery.h"),
                int("Cookie", "void *"),
                int("CtrlptCallback", "Upnp_FunPtr").header("Callback.h"),
            ],
        ),
        ClassSchema::new(
            "TestClass",
            vec![
                list("TheList"),
                int("TheInteger", "int"),
                int("TheUnsignedLong", "unsigned long"),
                int("TheCharPointer", "char *"),
                Member::new("TheBuffer", MemberKind::Buffer)
                    .type_name("struct TheStruct")
                    .header("TheStruct.h"),
                Member::new("TheActionComplete", MemberKind::Class)
                    .type_name("UpnpActionComplete")
                    .header("UpnpActionComplete.h"),
                string("TheString"),
                dom_string("TheDomString"),
            ],
        ),
    ])
}
