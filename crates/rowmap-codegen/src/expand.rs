use crate::schema::{Field, FieldTy, FlattenAccess, Record};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn record(record: &Record) -> TokenStream {
    let rowmap = quote!(_rowmap::codegen_support);
    let ident = &record.ident;

    let field_defs = record.fields.iter().map(|f| expand_field_def(f, &rowmap));
    let field_arms = record.fields.iter().map(|f| expand_field_arm(f, &rowmap));

    wrap_in_const(quote! {
        impl #rowmap::Record for #ident {
            fn field_defs() -> &'static [#rowmap::FieldDef] {
                &[ #( #field_defs ),* ]
            }

            fn field(&mut self, index: usize) -> #rowmap::Target<'_> {
                match index {
                    #( #field_arms )*
                    _ => panic!("field index {} out of range", index),
                }
            }
        }

        impl #rowmap::Bind for #ident {
            const KIND: #rowmap::Kind = #rowmap::Kind::Record {
                fields: <#ident as #rowmap::Record>::field_defs,
            };

            fn target(&mut self) -> #rowmap::Target<'_> {
                #rowmap::Target::Record(self)
            }
        }
    })
}

fn expand_field_def(field: &Field, rowmap: &TokenStream) -> TokenStream {
    let name = field.ident.to_string();

    let column = match &field.column {
        Some(lit) => quote!(#rowmap::Option::Some(#lit)),
        None => quote!(#rowmap::Option::None),
    };

    let kind = match &field.ty {
        FieldTy::Scalar => quote!(#rowmap::FieldKind::Scalar),
        FieldTy::Flatten { inner, .. } => quote!(#rowmap::FieldKind::Flatten {
            fields: <#inner as #rowmap::Record>::field_defs,
        }),
    };

    quote! {
        #rowmap::FieldDef {
            name: #name,
            column: #column,
            kind: #kind,
        }
    }
}

fn expand_field_arm(field: &Field, rowmap: &TokenStream) -> TokenStream {
    let id = field.id;
    let ident = &field.ident;

    match &field.ty {
        FieldTy::Scalar => quote! {
            #id => #rowmap::Target::Scalar(&mut self.#ident),
        },
        FieldTy::Flatten { inner, access } => match access {
            FlattenAccess::Direct => quote! {
                #id => #rowmap::Target::Record(&mut self.#ident),
            },
            FlattenAccess::Boxed => quote! {
                #id => #rowmap::Target::Record(&mut *self.#ident),
            },
            FlattenAccess::Option => quote! {
                #id => #rowmap::Target::Record(
                    self.#ident.get_or_insert_with(<#inner as #rowmap::Default>::default),
                ),
            },
            FlattenAccess::OptionBoxed => quote! {
                #id => #rowmap::Target::Record(
                    &mut **self.#ident.get_or_insert_with(#rowmap::Box::<#inner>::default),
                ),
            },
        },
    }
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
