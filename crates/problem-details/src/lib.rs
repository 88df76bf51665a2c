//! # [RFC 9457][rfc] - Problem Details for HTTP APIs
//!
//! Error bodies in the shape of `{ "type", "status", "title", "detail", ... }`.
//! Downstream crates describe their own problems by implementing [`ProblemType`] and turn their
//! error types into responses through [`AsProblemDetails`].
//!
//! [rfc]: https://www.rfc-editor.org/rfc/rfc9457.html

use std::any::type_name;
use std::borrow::Cow;

use mime::Mime;
use serde::ser::{Serialize, SerializeMap, Serializer};

mod problem_type;
pub use problem_type::ProblemType;

mod as_problem_details;
pub use as_problem_details::AsProblemDetails;

pub mod extension_members;
pub use extension_members::ExtensionMembers;

/// Returns the [`Content-Type`] value used in responses.
///
/// [`Content-Type`]: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Content-Type
pub fn content_type() -> Mime {
	"application/problem+json"
		.parse::<Mime>()
		.unwrap_or_else(|error| panic!("hard-coded string should always be valid: {error}"))
}

/// [RFC 9457][rfc] - Problem Details
///
/// [rfc]: https://www.rfc-editor.org/rfc/rfc9457.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDetails<T: ProblemType> {
	/// The problem type.
	///
	/// Determines the [`type`], [`status`] and [`title`] members.
	///
	/// [`type`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.1
	/// [`status`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.2
	/// [`title`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.3
	problem_type: T,

	/// The response's [`detail`] member.
	///
	/// [`detail`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.4
	detail: Option<Cow<'static, str>>,

	/// The response's [`instance`] member.
	///
	/// [`instance`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.5
	instance: Option<Cow<'static, str>>,

	/// Additional fields to include in the response.
	extension_members: ExtensionMembers,
}

impl<T: ProblemType> ProblemDetails<T> {
	/// Creates a new [`ProblemDetails`] object for the given [`ProblemType`].
	pub fn new(problem_type: T) -> Self {
		Self {
			problem_type,
			detail: None,
			instance: None,
			extension_members: ExtensionMembers::new(),
		}
	}

	/// Returns a shared reference to the [`ProblemType`] value.
	pub fn problem_type(&self) -> &T {
		&self.problem_type
	}

	/// Returns the value of the `detail` member, if any.
	pub fn detail(&self) -> Option<&str> {
		self.detail.as_deref()
	}

	/// Returns the value of the `instance` member, if any.
	pub fn instance(&self) -> Option<&str> {
		self.instance.as_deref()
	}

	/// Returns a shared reference to the [`ExtensionMembers`].
	pub fn extension_members(&self) -> &ExtensionMembers {
		&self.extension_members
	}

	/// Returns an exclusive reference to the [`ExtensionMembers`].
	pub fn extension_members_mut(&mut self) -> &mut ExtensionMembers {
		&mut self.extension_members
	}

	/// Populates the `detail` member.
	#[must_use]
	pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self {
		self.detail = Some(detail.into());
		self
	}

	/// Populates the `instance` member.
	#[must_use]
	pub fn with_instance(mut self, instance: impl Into<Cow<'static, str>>) -> Self {
		self.instance = Some(instance.into());
		self
	}

	/// Adds an [extension member] field.
	///
	/// # Panics
	///
	/// This function will panic if `value` cannot be serialized into a JSON value.
	///
	/// [extension member]: ExtensionMembers
	#[track_caller]
	pub fn add_extension_member<V>(&mut self, name: impl Into<String>, value: &V)
	where
		V: ?Sized + Serialize,
	{
		if let Err(error) = self.extension_members.add(name, value) {
			panic!("failed to serialize extension member of type `{}`: {error}", type_name::<V>());
		}
	}
}

impl<T: ProblemType> Serialize for ProblemDetails<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let field_count = 3 // type + status + title
			+ usize::from(self.detail().is_some())
			+ usize::from(self.instance().is_some())
			+ self.extension_members().count();

		let mut serializer = serializer.serialize_map(Some(field_count))?;

		serializer.serialize_entry("type", &self.problem_type().uri())?;
		serializer.serialize_entry("status", &self.problem_type().status().as_u16())?;
		serializer.serialize_entry("title", self.problem_type().title())?;

		if let Some(detail) = self.detail() {
			serializer.serialize_entry("detail", detail)?;
		}

		if let Some(instance) = self.instance() {
			serializer.serialize_entry("instance", instance)?;
		}

		for (key, value) in self.extension_members() {
			serializer.serialize_entry(key, value)?;
		}

		serializer.end()
	}
}

impl<T: ProblemType, B> From<ProblemDetails<T>> for http::Response<B>
where
	Vec<u8>: Into<B>,
{
	fn from(problem_details: ProblemDetails<T>) -> Self {
		(&problem_details).into()
	}
}

impl<T: ProblemType, B> From<&ProblemDetails<T>> for http::Response<B>
where
	Vec<u8>: Into<B>,
{
	fn from(problem_details: &ProblemDetails<T>) -> Self {
		let body = serde_json::to_vec(problem_details).unwrap_or_else(|error| {
			panic!("failed to serialize `ProblemDetails<{}>` into JSON: {error}", type_name::<T>());
		});

		let mut response = http::Response::new(body.into());

		*response.status_mut() = problem_details.problem_type().status();

		if let Ok(content_type) = http::HeaderValue::from_str(content_type().as_ref()) {
			response
				.headers_mut()
				.insert(http::header::CONTENT_TYPE, content_type);
		}

		response
	}
}

#[cfg(feature = "axum")]
impl<T: ProblemType> axum_core::response::IntoResponse for ProblemDetails<T> {
	fn into_response(self) -> axum_core::response::Response {
		self.into()
	}
}
