#[derive(Debug)]
pub(crate) struct Table {
    /// Explicit table name
    pub(crate) name: Option<syn::LitStr>,
}

impl Table {
    /// Parses `#[table]`, `#[table = "name"]` or `#[table("name")]`.
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Table> {
        match &attr.meta {
            syn::Meta::Path(_) => Ok(Table { name: None }),
            syn::Meta::List(_) => Ok(Table {
                name: Some(attr.parse_args()?),
            }),
            syn::Meta::NameValue(meta) => {
                let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit),
                    ..
                }) = &meta.value
                else {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected `table = \"table_name\"`",
                    ));
                };

                Ok(Table {
                    name: Some(lit.clone()),
                })
            }
        }
    }
}
