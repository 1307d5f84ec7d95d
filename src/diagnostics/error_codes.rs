//! Error code definitions and documentation

/// Input errors (E00xx)
pub mod input {
    pub const NOT_FOUND: &str = "E0001";
}

/// Document syntax errors (E01xx)
pub mod syntax {
    pub const INVALID_YAML: &str = "E0101";
    pub const INVALID_TOML: &str = "E0102";
    pub const NOT_A_MAPPING: &str = "E0103";
    pub const NON_STRING_KEY: &str = "E0104";
    pub const INTEGER_OUT_OF_RANGE: &str = "E0105";
    pub const DUPLICATE_KEY: &str = "E0106";
}

/// Record validation errors (E02xx)
pub mod validation {
    pub const NOT_A_MAPPING: &str = "E0201";
    pub const MISSING_FIELD: &str = "E0202";
    pub const WRONG_TYPE: &str = "E0203";
    pub const UNKNOWN_FIELD: &str = "E0204";
    pub const CODE_OVERFLOW: &str = "E0205";
    pub const EMPTY_DOCUMENT: &str = "E0206";
}

/// Rendering errors (E03xx)
pub mod render {
    pub const INVALID_IDENTIFIER: &str = "E0301";
    pub const DUPLICATE_IDENTIFIER: &str = "E0302";
    pub const DUPLICATE_DISCRIMINANT: &str = "E0303";
    pub const UNSUPPORTED_MESSAGE: &str = "E0304";
    pub const REPR_OVERFLOW: &str = "E0305";
}

/// Output errors (E04xx)
pub mod output {
    pub const WRITE_FAILED: &str = "E0401";
    pub const STALE: &str = "E0402";
}

/// Command-line option errors (E05xx)
pub mod options {
    pub const INVALID_OPTION: &str = "E0501";
}

/// Every code with an explanation, in numeric order
pub const ALL_CODES: &[&str] = &[
    input::NOT_FOUND,
    syntax::INVALID_YAML,
    syntax::INVALID_TOML,
    syntax::NOT_A_MAPPING,
    syntax::NON_STRING_KEY,
    syntax::INTEGER_OUT_OF_RANGE,
    syntax::DUPLICATE_KEY,
    validation::NOT_A_MAPPING,
    validation::MISSING_FIELD,
    validation::WRONG_TYPE,
    validation::UNKNOWN_FIELD,
    validation::CODE_OVERFLOW,
    validation::EMPTY_DOCUMENT,
    render::INVALID_IDENTIFIER,
    render::DUPLICATE_IDENTIFIER,
    render::DUPLICATE_DISCRIMINANT,
    render::UNSUPPORTED_MESSAGE,
    render::REPR_OVERFLOW,
    output::WRITE_FAILED,
    output::STALE,
    options::INVALID_OPTION,
];

/// Look up the long-form explanation of an error code.
pub fn explain(code: &str) -> Option<&'static str> {
    let text = match code {
        "E0001" => {
            "E0001: Input not found\n\n\
             The input document could not be read. Check that the path exists\n\
             and that the current user may read it."
        }
        "E0101" => {
            "E0101: Invalid YAML\n\n\
             The input document could not be parsed as YAML. A common cause\n\
             is an unquoted message containing `: `, which YAML reads as a\n\
             nested mapping. Quote such messages.\n\n\
             \x20   message: \"Error: bad request\""
        }
        "E0102" => {
            "E0102: Invalid TOML\n\n\
             The `.toml` input document could not be parsed as TOML."
        }
        "E0103" => {
            "E0103: Document is not a mapping\n\n\
             The top level of the document must map record names to records.\n\
             A list of records (`- name: ...`) or a bare value is rejected.\n\n\
             \x20   not_found:\n\
             \x20     code: 1002\n\
             \x20     message: Not found"
        }
        "E0104" => {
            "E0104: Key is not a string\n\n\
             Record names and field names must be strings. A key such as\n\
             `404:` or `true:` is read as a number or boolean; quote it."
        }
        "E0105" => {
            "E0105: Integer out of range\n\n\
             An integer literal does not fit in a signed 64-bit integer."
        }
        "E0106" => {
            "E0106: Duplicate key\n\n\
             A key appears twice in the same mapping. Record names must be\n\
             unique, as must the fields of each record."
        }
        "E0201" => {
            "E0201: Record is not a mapping\n\n\
             Each top-level key names a record whose value must be a mapping\n\
             with `code`, `message` and optionally `status`."
        }
        "E0202" => {
            "E0202: Missing field\n\n\
             A record lacks `code` or `message`. Both are required."
        }
        "E0203" => {
            "E0203: Wrong field type\n\n\
             `code` and `status` must be integers and `message` a string.\n\
             Values are never coerced: a quoted \"12\" is a string, and 1.5 is\n\
             not an integer."
        }
        "E0204" => {
            "E0204: Unknown field\n\n\
             Records only accept `code`, `status` and `message`."
        }
        "E0205" => {
            "E0205: Code overflow\n\n\
             `code * status` does not fit in a signed 64-bit integer."
        }
        "E0206" => {
            "E0206: Empty document\n\n\
             The document defines no records, so there is no enumeration to\n\
             generate."
        }
        "E0301" => {
            "E0301: Invalid identifier\n\n\
             The PascalCase form of a record name is not a valid Rust\n\
             identifier. Names must start with a letter or underscore once\n\
             separators are removed, and must not be a keyword such as `Self`."
        }
        "E0302" => {
            "E0302: Duplicate identifier\n\n\
             Two record names normalize to the same variant name, for example\n\
             `not_found` and `not-found`."
        }
        "E0303" => {
            "E0303: Duplicate discriminant\n\n\
             Two records compute the same final code. Rust requires enum\n\
             discriminants to be distinct."
        }
        "E0304" => {
            "E0304: Unsupported message\n\n\
             Messages are emitted verbatim into a `#[error(\"...\")]` format\n\
             string and are not escaped. Quotes, backslashes, braces and\n\
             control characters are rejected."
        }
        "E0305" => {
            "E0305: Discriminant out of range\n\n\
             A final code does not fit the integer type given with `--repr`."
        }
        "E0401" => {
            "E0401: Output write failed\n\n\
             The output file could not be created or written. A failure in\n\
             the middle of a write may leave a truncated file behind."
        }
        "E0402" => {
            "E0402: Output out of date\n\n\
             `--check` found that the output file is missing or differs from\n\
             what the input would generate. Re-run without `--check`."
        }
        "E0501" => {
            "E0501: Invalid option\n\n\
             A command-line option has an unusable value, such as an\n\
             `--enum-name` that is not a Rust identifier."
        }
        _ => return None,
    };
    Some(text)
}
