//! Shared enumeration tables for the version schemas
//!
//! Each table is an ordered set of `(stored value, canonical wire name)`
//! pairs: the stored value is what the import pipeline persists, the name
//! is what documents carry and what validation checks. The pairs match the
//! platform's historical constant tables, trimmed to the fields the
//! shipped sample schemas reference.
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use confimport_core::Enumeration;

pub fn status() -> Enumeration {
    Enumeration::new([("0", "ENABLED"), ("1", "DISABLED")])
}

pub fn yes_no() -> Enumeration {
    Enumeration::new([("0", "NO"), ("1", "YES")])
}

pub fn ipmi_authtype() -> Enumeration {
    Enumeration::new([
        ("-1", "DEFAULT"),
        ("0", "NONE"),
        ("1", "MD2"),
        ("2", "MD5"),
        ("4", "STRAIGHT"),
        ("5", "OEM"),
        ("6", "RMCP_PLUS"),
    ])
}

pub fn ipmi_privilege() -> Enumeration {
    Enumeration::new([
        ("1", "CALLBACK"),
        ("2", "USER"),
        ("3", "OPERATOR"),
        ("4", "ADMIN"),
        ("5", "OEM"),
    ])
}

pub fn interface_type() -> Enumeration {
    Enumeration::new([("1", "ZABBIX"), ("2", "SNMP"), ("3", "IPMI"), ("4", "JMX")])
}

pub fn snmp_version() -> Enumeration {
    Enumeration::new([("1", "SNMPV1"), ("2", "SNMPV2"), ("3", "SNMPV3")])
}

pub fn snmp_security_level() -> Enumeration {
    Enumeration::new([
        ("0", "NOAUTHNOPRIV"),
        ("1", "AUTHNOPRIV"),
        ("2", "AUTHPRIV"),
    ])
}

pub fn snmp_auth_protocol() -> Enumeration {
    Enumeration::new([
        ("0", "MD5"),
        ("1", "SHA1"),
        ("2", "SHA224"),
        ("3", "SHA256"),
        ("4", "SHA384"),
        ("5", "SHA512"),
    ])
}

pub fn snmp_priv_protocol() -> Enumeration {
    Enumeration::new([
        ("0", "DES"),
        ("1", "AES128"),
        ("2", "AES192"),
        ("3", "AES256"),
        ("4", "AES192C"),
        ("5", "AES256C"),
    ])
}

pub fn item_type() -> Enumeration {
    Enumeration::new([
        ("0", "ZABBIX_PASSIVE"),
        ("2", "TRAP"),
        ("3", "SIMPLE"),
        ("5", "INTERNAL"),
        ("7", "ZABBIX_ACTIVE"),
        ("10", "EXTERNAL"),
        ("11", "ODBC"),
        ("12", "IPMI"),
        ("13", "SSH"),
        ("14", "TELNET"),
        ("15", "CALCULATED"),
        ("16", "JMX"),
        ("17", "SNMP_TRAP"),
        ("18", "DEPENDENT"),
        ("19", "HTTP_AGENT"),
        ("20", "SNMP_AGENT"),
        ("21", "SCRIPT"),
    ])
}

pub fn value_type() -> Enumeration {
    Enumeration::new([
        ("0", "FLOAT"),
        ("1", "CHAR"),
        ("2", "LOG"),
        ("3", "UNSIGNED"),
        ("4", "TEXT"),
    ])
}

/// Authentication methods for agent-less checks over SSH/Telnet.
pub fn ssh_authtype() -> Enumeration {
    Enumeration::new([("0", "PASSWORD"), ("1", "PUBLIC_KEY")])
}

/// Authentication methods for HTTP agent items.
pub fn http_authtype() -> Enumeration {
    Enumeration::new([
        ("0", "NONE"),
        ("1", "BASIC"),
        ("2", "NTLM"),
        ("3", "KERBEROS"),
    ])
}

pub fn preprocessing_step_type() -> Enumeration {
    Enumeration::new([
        ("1", "MULTIPLIER"),
        ("2", "RTRIM"),
        ("3", "LTRIM"),
        ("4", "TRIM"),
        ("5", "REGEX"),
        ("6", "BOOL_TO_DECIMAL"),
        ("7", "OCTAL_TO_DECIMAL"),
        ("8", "HEX_TO_DECIMAL"),
        ("9", "SIMPLE_CHANGE"),
        ("10", "CHANGE_PER_SECOND"),
        ("11", "XMLPATH"),
        ("12", "JSONPATH"),
        ("13", "IN_RANGE"),
        ("14", "MATCHES_REGEX"),
        ("15", "NOT_MATCHES_REGEX"),
        ("16", "CHECK_JSON_ERROR"),
        ("17", "CHECK_XML_ERROR"),
        ("18", "CHECK_REGEX_ERROR"),
        ("19", "DISCARD_UNCHANGED"),
        ("20", "DISCARD_UNCHANGED_HEARTBEAT"),
        ("21", "JAVASCRIPT"),
        ("22", "PROMETHEUS_PATTERN"),
        ("23", "PROMETHEUS_TO_JSON"),
        ("24", "CSV_TO_JSON"),
        ("25", "STR_REPLACE"),
        ("26", "CHECK_NOT_SUPPORTED"),
        ("27", "XML_TO_JSON"),
    ])
}

pub fn preprocessing_error_handler() -> Enumeration {
    Enumeration::new([
        ("0", "ORIGINAL_ERROR"),
        ("1", "DISCARD_VALUE"),
        ("2", "CUSTOM_VALUE"),
        ("3", "CUSTOM_ERROR"),
    ])
}

pub fn trigger_priority() -> Enumeration {
    Enumeration::new([
        ("0", "NOT_CLASSIFIED"),
        ("1", "INFO"),
        ("2", "WARNING"),
        ("3", "AVERAGE"),
        ("4", "HIGH"),
        ("5", "DISASTER"),
    ])
}

pub fn trigger_recovery_mode() -> Enumeration {
    Enumeration::new([
        ("0", "EXPRESSION"),
        ("1", "RECOVERY_EXPRESSION"),
        ("2", "NONE"),
    ])
}

pub fn graph_type() -> Enumeration {
    Enumeration::new([
        ("0", "NORMAL"),
        ("1", "STACKED"),
        ("2", "PIE"),
        ("3", "EXPLODED"),
    ])
}

/// Y axis boundary source: fixed value, calculated, or taken from an item.
pub fn graph_y_type() -> Enumeration {
    Enumeration::new([("0", "CALCULATED"), ("1", "FIXED"), ("2", "ITEM")])
}

pub fn graph_draw_type() -> Enumeration {
    Enumeration::new([
        ("0", "SINGLE_LINE"),
        ("1", "FILLED_REGION"),
        ("2", "BOLD_LINE"),
        ("3", "DOTTED_LINE"),
        ("4", "DASHED_LINE"),
        ("5", "GRADIENT_LINE"),
    ])
}

pub fn graph_yaxis_side() -> Enumeration {
    Enumeration::new([("0", "LEFT"), ("1", "RIGHT")])
}

pub fn graph_calc_fnc() -> Enumeration {
    Enumeration::new([
        ("1", "MIN"),
        ("2", "AVG"),
        ("4", "MAX"),
        ("7", "ALL"),
        ("9", "LAST"),
    ])
}

pub fn graph_item_type() -> Enumeration {
    Enumeration::new([("0", "SIMPLE"), ("2", "GRAPH_SUM")])
}

pub fn inventory_mode() -> Enumeration {
    Enumeration::new([("-1", "DISABLED"), ("0", "MANUAL"), ("1", "AUTOMATIC")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_map_values_to_names() {
        assert_eq!(status().value_of("ENABLED"), Some("0"));
        assert_eq!(item_type().value_of("DEPENDENT"), Some("18"));
        assert_eq!(preprocessing_error_handler().value_of("DISCARD_VALUE"), Some("1"));
        assert!(graph_y_type().contains("ITEM"));
    }
}
