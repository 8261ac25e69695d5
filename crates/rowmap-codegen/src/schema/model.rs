use super::{ErrorSet, Field, Table};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Table mapping, if the struct is annotated with `#[table]`
    pub(crate) table: Option<Table>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut table = None;
        let mut fields = vec![];

        for attr in &ast.attrs {
            if attr.path().is_ident("table") {
                if table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                    continue;
                }

                match Table::from_ast(attr) {
                    Ok(parsed) => table = Some(parsed),
                    Err(err) => errs.push(err),
                }
            }
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            table,
        })
    }
}
