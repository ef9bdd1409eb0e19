use super::combine;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field among the record's non-skipped fields.
    pub(crate) id: usize,

    /// Field name
    pub(crate) ident: syn::Ident,

    /// Explicit external name from `#[column("...")]`
    pub(crate) column: Option<syn::LitStr>,

    /// Field type
    pub(crate) ty: FieldTy,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// Leaf field; its type must load from a single column value.
    Scalar,

    /// `#[flatten]` field holding a nested record.
    Flatten {
        /// The record type, stripped of `Option` / `Box` wrappers.
        inner: syn::Type,
        access: FlattenAccess,
    },
}

/// How a flattened field's record is reached from the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FlattenAccess {
    Direct,
    Boxed,
    /// Nullable; a default record is installed before binding.
    Option,
    OptionBoxed,
}

impl Field {
    /// Parses one declared field. `Ok(None)` means the field is skipped.
    /// A field with several bad attributes reports all of them in one
    /// combined error.
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Option<Field>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut column: Option<syn::LitStr> = None;
        let mut skip = false;
        let mut flatten = false;
        let mut invalid = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    combine(
                        &mut invalid,
                        syn::Error::new_spanned(attr, "duplicate #[column] attribute"),
                    );
                    continue;
                }

                match attr.parse_args::<syn::LitStr>() {
                    Ok(lit) if lit.value().is_empty() => combine(
                        &mut invalid,
                        syn::Error::new_spanned(attr, "column name must not be empty"),
                    ),
                    Ok(lit) => column = Some(lit),
                    Err(err) => combine(&mut invalid, err),
                }
            } else if attr.path().is_ident("skip") {
                if let Err(err) = attr.meta.require_path_only() {
                    combine(&mut invalid, err);
                }
                if skip {
                    combine(
                        &mut invalid,
                        syn::Error::new_spanned(attr, "duplicate #[skip] attribute"),
                    );
                }
                skip = true;
            } else if attr.path().is_ident("flatten") {
                if let Err(err) = attr.meta.require_path_only() {
                    combine(&mut invalid, err);
                }
                if flatten {
                    combine(
                        &mut invalid,
                        syn::Error::new_spanned(attr, "duplicate #[flatten] attribute"),
                    );
                }
                flatten = true;
            }
        }

        if skip {
            if column.is_some() {
                combine(
                    &mut invalid,
                    syn::Error::new_spanned(ident, "#[skip] field cannot also have #[column]"),
                );
            }
            if flatten {
                combine(
                    &mut invalid,
                    syn::Error::new_spanned(ident, "#[skip] field cannot also have #[flatten]"),
                );
            }
            return match invalid {
                Some(err) => Err(err),
                None => Ok(None),
            };
        }

        let ty = if flatten {
            if let Some(column) = &column {
                combine(
                    &mut invalid,
                    syn::Error::new_spanned(
                        column,
                        "#[flatten] field cannot have #[column]; its own fields name the columns",
                    ),
                );
            }

            let (inner, access) = unwrap_flatten_type(&field.ty);
            FieldTy::Flatten {
                inner: inner.clone(),
                access,
            }
        } else {
            FieldTy::Scalar
        };

        if let Some(err) = invalid {
            return Err(err);
        }

        Ok(Some(Field {
            id,
            ident: ident.clone(),
            column,
            ty,
        }))
    }
}

/// Strips the supported wrappers off a `#[flatten]` field type:
/// `Inner`, `Box<Inner>`, `Option<Inner>`, `Option<Box<Inner>>`.
fn unwrap_flatten_type(ty: &syn::Type) -> (&syn::Type, FlattenAccess) {
    if let Some(inner) = type_argument(ty, "Option") {
        match type_argument(inner, "Box") {
            Some(inner) => (inner, FlattenAccess::OptionBoxed),
            None => (inner, FlattenAccess::Option),
        }
    } else if let Some(inner) = type_argument(ty, "Box") {
        (inner, FlattenAccess::Boxed)
    } else {
        (ty, FlattenAccess::Direct)
    }
}

/// Returns the single generic type argument of `ty` when its last path
/// segment is named `name`.
fn type_argument<'a>(ty: &'a syn::Type, name: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    if path.qself.is_some() {
        return None;
    }

    let segment = path.path.segments.last()?;
    if segment.ident != name {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
