// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Plain-text rendering of identities and records.

use kubebrowser_client::{ClusterConfigRecord, UserIdentity};

pub const UNKNOWN_USER: &str = "(unknown user)";
pub const NO_CLUSTERS: &str = "No clusters available";

pub fn render_identity(identity: &UserIdentity) -> &str {
	if identity.is_known() {
		identity.as_str()
	} else {
		UNKNOWN_USER
	}
}

/// A header line followed by one aligned row per record, in input order.
pub fn render_list(identity: &UserIdentity, records: &[ClusterConfigRecord]) -> String {
	let mut out = format!("Signed in as {}\n", render_identity(identity));
	if records.is_empty() {
		out.push_str(NO_CLUSTERS);
		out.push('\n');
		return out;
	}

	let width = records
		.iter()
		.map(|r| r.name.chars().count())
		.chain(std::iter::once("NAME".len()))
		.max()
		.unwrap_or(0);

	out.push_str(&format!("{:<width$}  {:<12}  {}\n", "NAME", "KIND", "API VERSION"));
	for record in records {
		out.push_str(&format!(
			"{:<width$}  {:<12}  {}\n",
			record.name,
			record.kind().unwrap_or("-"),
			record.api_version().unwrap_or("-"),
		));
	}
	out
}

/// First record named `name`; names are not unique.
pub fn find_record<'a>(records: &'a [ClusterConfigRecord], name: &str) -> Option<&'a ClusterConfigRecord> {
	records.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
	use super::*;
	use kubebrowser_client::fixture_records;

	#[test]
	fn unknown_identity_is_labelled() {
		assert_eq!(render_identity(&UserIdentity::unknown()), UNKNOWN_USER);
		assert_eq!(render_identity(&UserIdentity::new("Alice")), "Alice");
	}

	#[test]
	fn empty_list_says_so() {
		let out = render_list(&UserIdentity::new("Alice"), &[]);
		assert_eq!(out, "Signed in as Alice\nNo clusters available\n");
	}

	#[test]
	fn list_has_one_row_per_record_in_order() {
		let records = fixture_records();
		let out = render_list(&UserIdentity::new("Firstname Lastname"), &records);
		let lines: Vec<&str> = out.lines().collect();

		assert_eq!(lines.len(), 2 + records.len());
		assert!(lines[1].starts_with("NAME"));
		assert!(lines[2].starts_with("Cluster number 1 "));
		assert!(lines[2].contains("Config "));
		assert!(lines[9].starts_with("Another cluster"));
		assert!(lines[9].contains("Another"));
		assert!(lines.iter().skip(2).all(|l| l.ends_with("v1")));
	}

	#[test]
	fn rows_are_aligned() {
		let records = fixture_records();
		let out = render_list(&UserIdentity::unknown(), &records);
		let kind_columns: Vec<usize> = out
			.lines()
			.skip(2)
			.map(|l| l.find("Config").or_else(|| l.find("Another  ")).unwrap())
			.collect();
		assert!(kind_columns.windows(2).all(|w| w[0] == w[1]));
	}

	#[test]
	fn find_returns_first_match() {
		let records = vec![
			ClusterConfigRecord::new("dup", Default::default()),
			ClusterConfigRecord::new("other", Default::default()),
			ClusterConfigRecord::new("dup", {
				let mut doc = kubebrowser_client::KubeconfigDocument::new();
				doc.insert("kind".to_string(), "Second".into());
				doc
			}),
		];
		let found = find_record(&records, "dup").unwrap();
		assert!(found.kubeconfig.is_empty());
		assert!(find_record(&records, "missing").is_none());
	}
}
