#[derive(Debug)]
pub(crate) struct Column {
    /// Explicit column name
    pub(crate) name: Option<syn::LitStr>,
}

impl Column {
    /// Parses `#[column]` or `#[column("name")]`.
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        match &attr.meta {
            syn::Meta::Path(_) => Ok(Column { name: None }),
            syn::Meta::List(_) => attr.parse_args(),
            syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
                attr,
                "expected `#[column]` or `#[column(\"name\")]`",
            )),
        }
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Column { name: None });
        }

        let lookahead = input.lookahead1();

        if !lookahead.peek(syn::LitStr) {
            return Err(lookahead.error());
        }

        let name = input.parse()?;

        if !input.is_empty() {
            return Err(syn::Error::new(input.span(), "unexpected column argument"));
        }

        Ok(Column { name: Some(name) })
    }
}
