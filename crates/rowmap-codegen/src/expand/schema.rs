use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let name = self.model.ident.unraw().to_string();
        let table = self.expand_table();
        let fields = self.model.fields.iter().map(|field| self.expand_field(field));

        quote! {
            fn schema() -> #rowmap::Model<Self> {
                #rowmap::Model {
                    name: ::std::concat!(::std::module_path!(), "::", #name).to_string(),
                    table: #table,
                    fields: ::std::vec![ #( #fields ),* ],
                }
            }
        }
    }

    fn expand_table(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        match &self.model.table {
            Some(table) => {
                let name = expand_name(table.name.as_ref());
                quote!(Some(#rowmap::schema::Table { name: #name }))
            }
            None => quote!(None),
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &field.ident;
        let ty = &field.ty;
        let name = ident.unraw().to_string();
        let key = field.key.is_some();

        let column = match &field.column {
            Some(column) => {
                let column_name = expand_name(column.name.as_ref());

                quote! {
                    Some(#rowmap::schema::Column {
                        name: #column_name,
                        ty: <#ty as #rowmap::stmt::Primitive>::TYPE,
                        nullable: <#ty as #rowmap::stmt::Primitive>::NULLABLE,
                        value: |entity: &Self| #rowmap::stmt::Primitive::to_value(&entity.#ident),
                    })
                }
            }
            None => quote!(None),
        };

        quote! {
            #rowmap::schema::Field {
                name: #name.to_string(),
                key: #key,
                column: #column,
            }
        }
    }
}

fn expand_name(name: Option<&syn::LitStr>) -> TokenStream {
    match name {
        Some(name) => quote!(Some(#name.to_string())),
        None => quote!(None),
    }
}
