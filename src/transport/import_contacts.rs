use serde::Deserialize;

use crate::domain::{
    FieldName, ImportContacts, ImportContactsResponse, ImportLogEntry, ListId,
};

use super::{ApiReply, TransportError, decode_envelope};

#[derive(Debug, Clone, Deserialize)]
struct ImportResultDto {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    inserted: u64,
    #[serde(default)]
    updated: u64,
    #[serde(default)]
    deleted: u64,
    #[serde(default)]
    new_emails: u64,
    #[serde(default)]
    invalid: u64,
    #[serde(default)]
    log: Vec<ImportLogDto>,
}

#[derive(Debug, Clone, Deserialize)]
struct ImportLogDto {
    #[serde(default)]
    index: u64,
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

pub fn encode_import_contacts_form(request: &ImportContacts) -> Vec<(String, String)> {
    let options = request.options();

    let mut columns: Vec<String> = request
        .effective_field_names()
        .iter()
        .map(|name| name.as_str().to_owned())
        .collect();

    // List membership travels as an extra column unless the caller already
    // supplies one.
    let joined_list_ids = join_list_ids(&options.list_ids);
    let has_list_column = columns.iter().any(|name| name == FieldName::EMAIL_LIST_IDS);
    let appended_list_column = !options.list_ids.is_empty() && !has_list_column;
    if appended_list_column {
        columns.push(FieldName::EMAIL_LIST_IDS.to_owned());
    }

    let mut params = Vec::<(String, String)>::new();
    for (idx, name) in columns.iter().enumerate() {
        params.push((format!("{}[{idx}]", FieldName::FIELD), name.clone()));
    }

    for (row, contact) in request.contacts().iter().enumerate() {
        for (col, name) in columns.iter().enumerate() {
            let value = match contact.get(name) {
                Some(value) => value.to_owned(),
                None if appended_list_column && name == FieldName::EMAIL_LIST_IDS => {
                    joined_list_ids.clone()
                }
                None => String::new(),
            };
            params.push((format!("data[{row}][{col}]"), value));
        }
    }

    if options.overwrite_lists {
        params.push(("overwrite_lists".to_owned(), "1".to_owned()));
    }

    params
}

fn join_list_ids(list_ids: &[ListId]) -> String {
    list_ids
        .iter()
        .map(|id| id.value().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn decode_import_contacts_json_response(
    json: &str,
) -> Result<ApiReply<ImportContactsResponse>, TransportError> {
    Ok(
        decode_envelope::<ImportResultDto>(json)?.map(|result| ImportContactsResponse {
            total: result.total,
            inserted: result.inserted,
            updated: result.updated,
            deleted: result.deleted,
            new_emails: result.new_emails,
            invalid: result.invalid,
            log: result
                .log
                .into_iter()
                .map(|entry| ImportLogEntry {
                    index: entry.index,
                    code: entry.code,
                    message: entry.message,
                })
                .collect(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use crate::domain::{Contact, ImportContactsOptions};

    use super::*;

    fn contact(pairs: &[(&str, &str)]) -> Contact {
        let mut contact = Contact::new();
        for (name, value) in pairs {
            contact.set(FieldName::new(*name).unwrap(), *value);
        }
        contact
    }

    #[test]
    fn encode_derived_columns_and_matrix() {
        let rows = vec![
            contact(&[("email", "a@example.com"), ("Name", "A")]),
            contact(&[("email", "b@example.com")]),
        ];
        let request = ImportContacts::new(rows, ImportContactsOptions::default()).unwrap();
        let params = encode_import_contacts_form(&request);

        assert_eq!(
            params,
            vec![
                ("field_names[0]".to_owned(), "Name".to_owned()),
                ("field_names[1]".to_owned(), "email".to_owned()),
                ("data[0][0]".to_owned(), "A".to_owned()),
                ("data[0][1]".to_owned(), "a@example.com".to_owned()),
                ("data[1][0]".to_owned(), String::new()),
                ("data[1][1]".to_owned(), "b@example.com".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_appends_list_ids_column_to_every_row() {
        let rows = vec![
            contact(&[("email", "a@example.com")]),
            contact(&[("email", "b@example.com")]),
        ];
        let request = ImportContacts::new(
            rows,
            ImportContactsOptions {
                list_ids: vec![ListId::new(1), ListId::new(5)],
                ..Default::default()
            },
        )
        .unwrap();
        let params = encode_import_contacts_form(&request);

        assert!(params.contains(&("field_names[1]".to_owned(), "email_list_ids".to_owned())));
        assert!(params.contains(&("data[0][1]".to_owned(), "1,5".to_owned())));
        assert!(params.contains(&("data[1][1]".to_owned(), "1,5".to_owned())));
    }

    #[test]
    fn encode_keeps_caller_supplied_list_column() {
        let rows = vec![
            contact(&[("email", "a@example.com"), ("email_list_ids", "9")]),
            contact(&[("email", "b@example.com")]),
        ];
        let request = ImportContacts::new(
            rows,
            ImportContactsOptions {
                list_ids: vec![ListId::new(1)],
                ..Default::default()
            },
        )
        .unwrap();
        let params = encode_import_contacts_form(&request);

        // The derived column set already contains email_list_ids, so no
        // extra column is appended and rows keep their own values.
        assert!(params.contains(&("data[0][1]".to_owned(), "9".to_owned())));
        assert!(params.contains(&("data[1][1]".to_owned(), String::new())));
        assert!(!params.iter().any(|(key, _)| key == "field_names[2]"));
    }

    #[test]
    fn encode_overwrite_lists_flag_only_when_set() {
        let rows = vec![contact(&[("email", "a@example.com")])];
        let request = ImportContacts::new(rows.clone(), ImportContactsOptions::default()).unwrap();
        assert!(
            !encode_import_contacts_form(&request)
                .iter()
                .any(|(key, _)| key == "overwrite_lists")
        );

        let request = ImportContacts::new(
            rows,
            ImportContactsOptions {
                overwrite_lists: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(
            encode_import_contacts_form(&request)
                .contains(&("overwrite_lists".to_owned(), "1".to_owned()))
        );
    }

    #[test]
    fn decode_import_statistics() {
        let json = r#"
        {
          "result": {
            "total": 3,
            "inserted": 2,
            "updated": 1,
            "deleted": 0,
            "new_emails": 2,
            "invalid": 0,
            "log": [
              {"index": 1, "code": "invalid_email", "message": "bad address"}
            ]
          }
        }
        "#;
        let reply = decode_import_contacts_json_response(json).unwrap();
        let ApiReply::Success(response) = reply else {
            panic!("expected success");
        };
        assert_eq!(response.total, 3);
        assert_eq!(response.inserted, 2);
        assert_eq!(response.updated, 1);
        assert_eq!(response.new_emails, 2);
        assert_eq!(
            response.log,
            vec![ImportLogEntry {
                index: 1,
                code: "invalid_email".to_owned(),
                message: "bad address".to_owned(),
            }]
        );
    }

    #[test]
    fn decode_tolerates_missing_counters() {
        let reply = decode_import_contacts_json_response(r#"{"result": {"total": 1}}"#).unwrap();
        let ApiReply::Success(response) = reply else {
            panic!("expected success");
        };
        assert_eq!(response.total, 1);
        assert_eq!(response.invalid, 0);
        assert!(response.log.is_empty());
    }
}
