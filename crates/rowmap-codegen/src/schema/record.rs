use super::{combine, Field};

use proc_macro2::TokenStream;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Non-skipped fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    /// Parses the derive input. Field-level problems are accumulated so a
    /// struct with several bad attributes reports all of them at once.
    pub(crate) fn parse(input: TokenStream) -> syn::Result<Record> {
        let item: syn::ItemStruct = syn::parse2(input)?;

        let syn::Fields::Named(named) = &item.fields else {
            return Err(syn::Error::new_spanned(
                &item.fields,
                "#[derive(Record)] requires a struct with named fields",
            ));
        };

        if !item.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                "#[derive(Record)] does not support generic structs",
            ));
        }

        let mut invalid = None;
        let mut fields = vec![];

        for field in &named.named {
            match Field::from_ast(field, fields.len()) {
                Ok(Some(field)) => fields.push(field),
                // skipped field
                Ok(None) => {}
                Err(err) => combine(&mut invalid, err),
            }
        }

        if let Some(err) = invalid {
            return Err(err);
        }

        Ok(Record {
            ident: item.ident,
            fields,
        })
    }
}
