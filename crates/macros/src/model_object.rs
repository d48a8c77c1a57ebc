//! ModelObject derive macro implementation

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{GenericArgument, Ident, PathArguments, Type};

use crate::parse::{parse_model_object, FieldArgs, FieldKind, ModelObjectArgs};

/// Extract the inner type from `PhantomData<T>` if present, otherwise return the type as-is
fn extract_inner_type(ty: &Type) -> &Type {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if segment.ident == "PhantomData" {
                if let PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(GenericArgument::Type(inner)) = args.args.first() {
                        return inner;
                    }
                }
            }
        }
    }
    ty
}

/// Field identifier without a leading underscore
fn clean_name(field: &FieldArgs) -> String {
    let name = field.ident.as_ref().map(ToString::to_string).unwrap_or_default();
    name.strip_prefix('_').unwrap_or(&name).to_string()
}

fn static_name(struct_name: &Ident, field: &FieldArgs) -> Ident {
    format_ident!(
        "__{}__{}_FIELD",
        struct_name.to_string().to_uppercase(),
        clean_name(field).to_uppercase()
    )
}

fn const_name(field: &FieldArgs) -> Ident {
    format_ident!("{}_FIELD", clean_name(field).to_uppercase())
}

/// Generate the ModelObject implementation
pub fn derive_model_object(input: syn::DeriveInput) -> TokenStream {
    match parse_model_object(&input).and_then(generate_impl) {
        Ok(tokens) => tokens,
        Err(e) => e.write_errors(),
    }
}

fn generate_impl(args: ModelObjectArgs) -> darling::Result<TokenStream> {
    let struct_name = &args.ident;
    let idd = &args.idd;

    let fields = match &args.data {
        darling::ast::Data::Struct(fields) => &fields.fields,
        _ => {
            return Err(darling::Error::custom("ModelObject can only be derived for structs")
                .with_span(&args.ident))
        }
    };

    if !fields.iter().any(FieldArgs::is_obj_field) {
        return Err(darling::Error::custom("expected an `obj: ModelObject` field")
            .with_span(&args.ident));
    }

    let schema_fields: Vec<&FieldArgs> = fields.iter().filter(|f| f.is_schema_field()).collect();

    let mut errors = darling::Error::accumulator();
    let kinds: Vec<Option<FieldKind>> = schema_fields
        .iter()
        .map(|f| errors.handle(f.kind().map_err(|e| e.with_span(&f.ty))))
        .collect();
    errors.finish()?;

    // Static accessor storage (one per field)
    let field_statics = schema_fields
        .iter()
        .map(|f| generate_field_static(struct_name, idd, f));

    let accessors = schema_fields
        .iter()
        .zip(kinds.iter().flatten())
        .map(|(f, kind)| generate_accessors(struct_name, f, *kind));

    let constants = generate_constants(&args, &schema_fields);
    let constructor = generate_constructor(&args, fields);
    let parent_accessors = generate_parent_accessors(&args);
    let trait_impls = generate_trait_impls(&args, &schema_fields);

    Ok(quote! {
        #(#field_statics)*

        impl #struct_name {
            #constants
            #constructor
            #parent_accessors
        }

        #(#accessors)*

        #trait_impls
    })
}

fn generate_field_static(struct_name: &Ident, idd: &Ident, field: &FieldArgs) -> TokenStream {
    let static_name = static_name(struct_name, field);
    let field_ty = extract_inner_type(&field.ty);
    let field_name = field.field_name.as_deref().unwrap_or_default();

    quote! {
        static #static_name: ::osmodel_core::schema::SchemaField<#field_ty> =
            ::osmodel_core::schema::SchemaField::new(
                ::osmodel_core::IddObjectType::#idd,
                #field_name,
            );
    }
}

fn generate_accessors(struct_name: &Ident, field: &FieldArgs, kind: FieldKind) -> TokenStream {
    let field_ty = extract_inner_type(&field.ty);
    let field_name = field.field_name.as_deref().unwrap_or_default();
    let static_name = static_name(struct_name, field);
    let const_name = const_name(field);

    let clean = clean_name(field);
    let getter_name = format_ident!("{}", clean);
    let setter_name = format_ident!("set_{}", clean);
    let reset_name = format_ident!("reset_{}", clean);

    let getter_doc = format!("Get the value of `{}`", field_name);
    let setter_doc = format!("Set the value of `{}`", field_name);
    let reset_doc = format!("Clear `{}`", field_name);

    let getter = match kind {
        FieldKind::Required | FieldKind::Defaulted => quote! {
            #[doc = #getter_doc]
            pub fn #getter_name(&self) -> #field_ty {
                match #static_name.get(&self.obj) {
                    Some(value) => value,
                    None => ::osmodel_core::model::missing_required(&self.obj, Self::#const_name),
                }
            }
        },
        FieldKind::Optional => quote! {
            #[doc = #getter_doc]
            pub fn #getter_name(&self) -> ::std::option::Option<#field_ty> {
                #static_name.get(&self.obj)
            }
        },
        FieldKind::Autosizable => quote! {
            #[doc = #getter_doc]
            ///
            /// `None` while the field is autosized.
            pub fn #getter_name(&self) -> ::std::option::Option<f64> {
                #static_name.sizing(&self.obj).and_then(|value| value.value())
            }
        },
        FieldKind::Pointer => quote! {
            #[doc = #getter_doc]
            pub fn #getter_name(&self) -> ::std::option::Option<#field_ty> {
                #static_name.target(&self.obj)
            }
        },
    };

    let setter = if field.readonly {
        quote! {}
    } else if kind == FieldKind::Pointer {
        quote! {
            #[doc = #setter_doc]
            pub fn #setter_name(&self, target: &#field_ty) -> bool {
                #static_name.set_target(&self.obj, target)
            }
        }
    } else {
        quote! {
            #[doc = #setter_doc]
            pub fn #setter_name(&self, value: impl ::std::convert::Into<#field_ty>) -> bool {
                #static_name.set(&self.obj, value.into())
            }
        }
    };

    let reset = match kind {
        FieldKind::Required => quote! {},
        _ if field.readonly => quote! {},
        _ => quote! {
            #[doc = #reset_doc]
            pub fn #reset_name(&self) -> bool {
                #static_name.reset(&self.obj)
            }
        },
    };

    let defaulted = if kind == FieldKind::Defaulted {
        let is_defaulted = format_ident!("is_{}_defaulted", clean);
        quote! {
            pub fn #is_defaulted(&self) -> bool {
                #static_name.is_empty(&self.obj)
            }
        }
    } else {
        quote! {}
    };

    let sizing = if kind == FieldKind::Autosizable {
        let is_autosized = format_ident!("is_{}_autosized", clean);
        let autosize = format_ident!("autosize_{}", clean);
        let sizing_name = format_ident!("{}_sizing", clean);
        let autosized = field.sizing.as_ref().map(|label| {
            let autosized_name = format_ident!("autosized_{}", clean);
            let units = field.units.as_deref().unwrap_or_default();
            quote! {
                /// Value from the model's sizing results
                pub fn #autosized_name(&self) -> ::std::option::Option<f64> {
                    self.obj.autosized_value(#label, #units)
                }
            }
        });
        quote! {
            pub fn #is_autosized(&self) -> bool {
                #static_name
                    .sizing(&self.obj)
                    .is_some_and(|value| value.is_autosized())
            }

            pub fn #autosize(&self) -> bool {
                #static_name.set_sizing(&self.obj, ::osmodel_core::idf::SizingValue::Autosized)
            }

            pub fn #sizing_name(&self) -> ::std::option::Option<::osmodel_core::idf::SizingValue> {
                #static_name.sizing(&self.obj)
            }

            #autosized
        }
    } else {
        quote! {}
    };

    let choices = if field.choice {
        let valid_name = format_ident!("valid_{}_values", clean);
        quote! {
            /// Keys accepted by the setter
            pub fn #valid_name() -> ::std::vec::Vec<::std::string::String> {
                #static_name
                    .idd_field()
                    .keys
                    .iter()
                    .map(|key| key.to_string())
                    .collect()
            }
        }
    } else {
        quote! {}
    };

    quote! {
        impl #struct_name {
            #getter
            #setter
            #reset
            #defaulted
            #sizing
            #choices
        }
    }
}

fn child_types(args: &ModelObjectArgs) -> TokenStream {
    let children = &args.children;
    quote! {
        &[#(<#children as ::osmodel_core::model::ModelObjectType>::IDD_OBJECT_TYPE),*]
    }
}

fn generate_constants(args: &ModelObjectArgs, fields: &[&FieldArgs]) -> TokenStream {
    let idd = &args.idd;
    let child_types = child_types(args);

    let field_constants = fields.iter().map(|f| {
        let const_name = const_name(f);
        let field_name = f.field_name.as_deref().unwrap_or_default();
        let field_doc = format!("Schema field name for `{}`", clean_name(f));
        quote! {
            #[doc = #field_doc]
            pub const #const_name: &'static str = #field_name;
        }
    });

    quote! {
        /// Schema type of this wrapper
        pub const IDD_OBJECT_TYPE: ::osmodel_core::IddObjectType =
            ::osmodel_core::IddObjectType::#idd;

        /// Types whose parent is this object
        pub const ALLOWABLE_CHILD_TYPES: &'static [::osmodel_core::IddObjectType] = #child_types;

        #(#field_constants)*
    }
}

fn generate_constructor(args: &ModelObjectArgs, fields: &[FieldArgs]) -> TokenStream {
    let idd = &args.idd;
    let field_inits = fields
        .iter()
        .filter(|f| !f.is_obj_field())
        .filter_map(|f| {
            let ident = f.ident.as_ref()?;
            Some(quote! { #ident: ::std::marker::PhantomData })
        });

    let new = if args.unique {
        quote! {}
    } else {
        quote! {
            /// Create a new object in `model` with its constructor values
            pub fn new(model: &::osmodel_core::model::Model) -> Self {
                Self::wrap(model.create_object(::osmodel_core::IddObjectType::#idd))
            }
        }
    };

    quote! {
        fn wrap(obj: ::osmodel_core::model::ModelObject) -> Self {
            Self {
                obj,
                #(#field_inits),*
            }
        }

        #new
    }
}

fn generate_parent_accessors(args: &ModelObjectArgs) -> TokenStream {
    let Some(parent) = &args.parent else {
        return quote! {};
    };
    quote! {
        /// The parent object, created if absent
        pub fn parent(&self) -> ::std::option::Option<#parent> {
            self.obj
                .parent()
                .and_then(<#parent as ::osmodel_core::model::ModelObjectCast>::from_object)
        }

        pub fn set_parent(&self, parent: &#parent) -> bool {
            self.obj
                .set_parent(::osmodel_core::model::ModelObjectCast::as_object(parent))
        }
    }
}

fn generate_trait_impls(args: &ModelObjectArgs, fields: &[&FieldArgs]) -> TokenStream {
    let struct_name = &args.ident;
    let idd = &args.idd;
    let child_types = child_types(args);

    let parent_rule = match &args.parent {
        Some(parent) => quote! {
            ::osmodel_core::model::ParentRule::Unique(
                <#parent as ::osmodel_core::model::ModelObjectType>::IDD_OBJECT_TYPE
            )
        },
        None => quote! { ::osmodel_core::model::ParentRule::None },
    };

    let init = match &args.init {
        Some(init) => quote! { ::std::option::Option::Some(#init as ::osmodel_core::model::InitFn) },
        None => quote! { ::std::option::Option::None },
    };

    let unique_impl = if args.unique {
        quote! {
            impl ::osmodel_core::model::UniqueModelObject for #struct_name {}
        }
    } else {
        quote! {}
    };

    let sized_fields: Vec<_> = fields
        .iter()
        .filter_map(|f| {
            let description = f.sizing.as_ref()?;
            let field_name = f.field_name.as_deref().unwrap_or_default();
            let units = f.units.as_deref().unwrap_or_default();
            Some(quote! {
                ::osmodel_core::model::SizedField {
                    field_name: #field_name,
                    description: #description,
                    units: #units,
                }
            })
        })
        .collect();

    let autosize_impl = if sized_fields.is_empty() {
        quote! {}
    } else {
        quote! {
            impl ::osmodel_core::model::Autosize for #struct_name {
                const SIZED_FIELDS: &'static [::osmodel_core::model::SizedField] =
                    &[#(#sized_fields),*];
            }
        }
    };

    quote! {
        impl ::osmodel_core::model::ModelObjectCast for #struct_name {
            fn from_object(object: ::osmodel_core::model::ModelObject) -> ::std::option::Option<Self> {
                if object.object_type() == ::osmodel_core::IddObjectType::#idd {
                    ::std::option::Option::Some(Self::wrap(object))
                } else {
                    ::std::option::Option::None
                }
            }

            fn as_object(&self) -> &::osmodel_core::model::ModelObject {
                &self.obj
            }
        }

        impl ::osmodel_core::model::ModelObjectType for #struct_name {
            const IDD_OBJECT_TYPE: ::osmodel_core::IddObjectType =
                ::osmodel_core::IddObjectType::#idd;

            const ALLOWABLE_CHILD_TYPES: &'static [::osmodel_core::IddObjectType] = #child_types;

            fn type_info() -> ::osmodel_core::model::TypeInfo {
                ::osmodel_core::model::TypeInfo {
                    object_type: ::osmodel_core::IddObjectType::#idd,
                    parent: #parent_rule,
                    allowable_child_types:
                        <Self as ::osmodel_core::model::ModelObjectType>::ALLOWABLE_CHILD_TYPES,
                    init: #init,
                }
            }
        }

        #unique_impl
        #autosize_impl

        impl ::std::ops::Deref for #struct_name {
            type Target = ::osmodel_core::model::ModelObject;

            fn deref(&self) -> &Self::Target {
                &self.obj
            }
        }

        impl ::std::convert::From<#struct_name> for ::osmodel_core::model::ModelObject {
            fn from(value: #struct_name) -> Self {
                value.obj
            }
        }

        impl ::std::cmp::PartialEq for #struct_name {
            fn eq(&self, other: &Self) -> bool {
                self.obj == other.obj
            }
        }

        impl ::std::cmp::Eq for #struct_name {}

        impl ::std::hash::Hash for #struct_name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&self.obj, state)
            }
        }

        impl ::std::fmt::Debug for #struct_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(stringify!(#struct_name)).field(&self.obj.handle()).finish()
            }
        }
    }
}
