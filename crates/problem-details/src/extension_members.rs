//! The [`ExtensionMembers`] type.

use std::fmt;

use serde::Serialize;

type Fields = serde_json::Map<String, serde_json::Value>;

/// Extra fields to include in [`ProblemDetails`].
///
/// This corresponds to [Section 3.2] of the [RFC].
///
/// [`ProblemDetails`]: crate::ProblemDetails
/// [Section 3.2]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.2
/// [RFC]: https://www.rfc-editor.org/rfc/rfc9457.html
#[derive(Default, Clone, PartialEq, Eq)]
pub struct ExtensionMembers {
	fields: Fields,
}

/// An iterator over the members stored in [`ExtensionMembers`].
pub struct Iter<'a> {
	fields: serde_json::map::Iter<'a>,
}

impl ExtensionMembers {
	/// Creates a new empty [`ExtensionMembers`].
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of extension members.
	pub fn count(&self) -> usize {
		self.fields.len()
	}

	/// Returns the value of the extension member with the given `name`, if any.
	pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
		self.fields.get(name)
	}

	/// Adds a new extension member.
	///
	/// If there was already a member for the given `name`, its old value will be returned.
	pub fn add<V>(
		&mut self,
		name: impl Into<String>,
		value: &V,
	) -> Result<Option<serde_json::Value>, serde_json::Error>
	where
		V: Serialize + ?Sized,
	{
		serde_json::to_value(value).map(|value| self.fields.insert(name.into(), value))
	}

	/// Returns an iterator over the stored members.
	pub fn iter(&self) -> Iter<'_> {
		self.into_iter()
	}
}

impl fmt::Debug for ExtensionMembers {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.debug_map().entries(&self.fields).finish()
	}
}

impl fmt::Debug for Iter<'_> {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.debug_struct("Iter").finish_non_exhaustive()
	}
}

impl<'a> IntoIterator for &'a ExtensionMembers {
	type Item = (&'a str, &'a serde_json::Value);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		Iter { fields: self.fields.iter() }
	}
}

impl<'a> Iterator for Iter<'a> {
	type Item = (&'a str, &'a serde_json::Value);

	fn next(&mut self) -> Option<Self::Item> {
		self.fields.next().map(|(key, value)| (key.as_str(), value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.fields.size_hint()
	}
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_replaces_existing_member() {
		let mut members = ExtensionMembers::new();

		assert_eq!(members.add("column", &1_u32).unwrap(), None);
		assert_eq!(members.add("column", &7_u32).unwrap(), Some(serde_json::json!(1)));
		assert_eq!(members.count(), 1);
		assert_eq!(members.get("column"), Some(&serde_json::json!(7)));
	}
}
