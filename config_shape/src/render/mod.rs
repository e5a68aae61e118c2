//! Path-aware structural mapping over configuration trees.
//!
//! [`map_render`] walks a [`ConfigValue`] depth-first in source key and index
//! order and rebuilds it with every scalar replaced by the callback's result.
//! Mappings keep their key set and order; sequences keep their order and
//! length. The callback receives the [`Keypath`] from the root to each scalar,
//! so it can single out specific nodes.
//!
//! Opaque values abort the traversal with [`ShapeError::ConfigShape`]; no
//! partial result is returned and the input is never modified.

use tracing::debug;

use crate::{ConfigValue, Keypath, Mapping, Scalar, ShapeError, ShapeResult};

/// Rebuild `value` with every scalar replaced by `f(scalar, keypath)`.
///
/// # Errors
///
/// Returns [`ShapeError::ConfigShape`] when the tree contains an opaque value.
///
/// # Examples
///
/// ```rust
/// use config_shape::{from_json_str, map_render, KeySegment, Scalar};
///
/// let input = from_json_str(r#"{"foo": {"baz": [1, 2]}}"#)?;
/// let target = [KeySegment::from("foo"), "baz".into(), 1.into()];
/// let output = map_render(&input, |scalar, keypath| {
///     if keypath.matches(&target) {
///         Scalar::from("hello")
///     } else {
///         scalar.clone()
///     }
/// })?;
/// assert_eq!(output, from_json_str(r#"{"foo": {"baz": [1, "hello"]}}"#)?);
/// # Ok::<_, config_shape::ShapeError>(())
/// ```
pub fn map_render<F>(value: &ConfigValue, mut f: F) -> ShapeResult<ConfigValue>
where
    F: FnMut(&Scalar, &Keypath) -> Scalar,
{
    try_map_render(value, |scalar, keypath| Ok::<_, ShapeError>(f(scalar, keypath)))
}

/// Fallible variant of [`map_render`]: the first callback error aborts the
/// traversal and is returned unchanged.
///
/// # Errors
///
/// Returns the callback's error, or [`ShapeError::ConfigShape`] converted into
/// `E` when the tree contains an opaque value.
///
/// # Examples
///
/// ```rust
/// use config_shape::{from_json_str, try_map_render, Scalar, ShapeError};
///
/// #[derive(Debug)]
/// enum RenderError { Shape(ShapeError), Undefined(String) }
///
/// impl From<ShapeError> for RenderError {
///     fn from(err: ShapeError) -> Self { Self::Shape(err) }
/// }
///
/// let input = from_json_str(r#"{"name": "{{ missing }}"}"#)?;
/// let result = try_map_render(&input, |scalar, keypath| match scalar.as_str() {
///     Some(text) if text.contains("{{") => Err(RenderError::Undefined(keypath.to_string())),
///     _ => Ok(scalar.clone()),
/// });
/// assert!(matches!(result, Err(RenderError::Undefined(path)) if path == "name"));
/// # Ok::<_, ShapeError>(())
/// ```
pub fn try_map_render<F, E>(value: &ConfigValue, mut f: F) -> Result<ConfigValue, E>
where
    F: FnMut(&Scalar, &Keypath) -> Result<Scalar, E>,
    E: From<ShapeError>,
{
    let mut keypath = Keypath::root();
    render_value(value, &mut keypath, &mut f)
}

fn render_value<F, E>(
    value: &ConfigValue,
    keypath: &mut Keypath,
    f: &mut F,
) -> Result<ConfigValue, E>
where
    F: FnMut(&Scalar, &Keypath) -> Result<Scalar, E>,
    E: From<ShapeError>,
{
    match value {
        ConfigValue::Mapping(mapping) => {
            render_mapping(mapping, keypath, f).map(ConfigValue::Mapping)
        }
        ConfigValue::Sequence(items) => {
            render_sequence(items, keypath, f).map(ConfigValue::Sequence)
        }
        ConfigValue::Scalar(scalar) => f(scalar, keypath).map(ConfigValue::Scalar),
        ConfigValue::Opaque(opaque) => {
            debug!(
                keypath = %keypath,
                type_name = opaque.type_name(),
                "unsupported value in configuration tree"
            );
            Err(ShapeError::config_shape(keypath.clone(), opaque.type_name()).into())
        }
    }
}

fn render_mapping<F, E>(
    mapping: &Mapping,
    keypath: &mut Keypath,
    f: &mut F,
) -> Result<Mapping, E>
where
    F: FnMut(&Scalar, &Keypath) -> Result<Scalar, E>,
    E: From<ShapeError>,
{
    let mut rendered = Mapping::with_capacity(mapping.len());
    for (key, item) in mapping {
        keypath.push(key.as_str());
        let result = render_value(item, keypath, f);
        keypath.pop();
        rendered.insert(key.clone(), result?);
    }
    Ok(rendered)
}

fn render_sequence<F, E>(
    items: &[ConfigValue],
    keypath: &mut Keypath,
    f: &mut F,
) -> Result<Vec<ConfigValue>, E>
where
    F: FnMut(&Scalar, &Keypath) -> Result<Scalar, E>,
    E: From<ShapeError>,
{
    let mut rendered = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        keypath.push(index);
        let result = render_value(item, keypath, f);
        keypath.pop();
        rendered.push(result?);
    }
    Ok(rendered)
}
