use crate::{
    CapabilityResolver, Error, FlatField, PrimitiveKind, Print, QualifiedName, TypeDescriptor,
};

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use ref_cast::RefCast;

/// Turns a flattened field list into the record's encode/decode pair, one
/// `TokenStream` per record. Every type-resolution failure is detected here,
/// at generation time, before a single token is produced; a record that fails
/// emits nothing.
pub struct CodeEmitter<'a> {
    resolver: &'a CapabilityResolver<'a>,
}

impl<'a> CodeEmitter<'a> {
    pub fn new(resolver: &'a CapabilityResolver<'a>) -> Self {
        CodeEmitter { resolver }
    }

    pub fn emit(&self, record: &QualifiedName, fields: &[FlatField]) -> Result<TokenStream, Error> {
        for field in fields {
            self.check(record, &field.name, &field.descriptor)?;
        }

        let path = Print::ref_cast(record);

        let encode_entries = fields.iter().map(|field| {
            let name = &field.name;
            let ident = Ident::new(&field.name, Span::call_site());
            let encoded = encode_expr(&field.descriptor, quote!((&self.#ident)));
            quote!((::std::string::String::from(#name), #encoded))
        });

        let decode_entries = fields.iter().map(|field| {
            let name = &field.name;
            let ident = Ident::new(&field.name, Span::call_site());
            let decoded = decode_expr(&field.descriptor, quote!(__value));
            quote! {
                #ident: {
                    let __value = ::reflectgen::runtime::field(__fields, #name)?;
                    #decoded
                }
            }
        });

        Ok(quote! {
            impl #path {
                pub fn encode(&self) -> ::reflectgen::runtime::Value {
                    ::reflectgen::runtime::Value::Record(::std::vec![
                        #(#encode_entries,)*
                    ])
                }

                pub fn decode(value: &::reflectgen::runtime::Value)
                    -> ::std::result::Result<Self, ::reflectgen::runtime::DecodeError>
                {
                    let __fields = ::reflectgen::runtime::expect_record(value)?;
                    ::std::result::Result::Ok(Self {
                        #(#decode_entries,)*
                    })
                }
            }
        })
    }

    /// Recursive generation-time admission check: a descriptor is emittable
    /// iff every shape inside it is, and every referenced record is capable.
    fn check(
        &self,
        record: &QualifiedName,
        field: &str,
        descriptor: &TypeDescriptor,
    ) -> Result<(), Error> {
        match descriptor {
            TypeDescriptor::Primitive(_) | TypeDescriptor::Text => Ok(()),
            TypeDescriptor::Sequence(element) => self.check(record, field, element),
            TypeDescriptor::Mapping(key, value) => {
                self.check(record, field, key)?;
                self.check(record, field, value)
            }
            TypeDescriptor::Record(target) => {
                if self.resolver.is_capable(target)? {
                    Ok(())
                } else {
                    Err(Error::NonSerializableFieldType {
                        record: record.clone(),
                        field: field.to_owned(),
                        target: target.clone(),
                    })
                }
            }
            TypeDescriptor::Opaque(spelling) => Err(Error::UnsupportedType {
                record: record.clone(),
                field: field.to_owned(),
                spelling: spelling.clone(),
            }),
        }
    }
}

/// `place` is an expression of reference type to the value being encoded.
fn encode_expr(descriptor: &TypeDescriptor, place: TokenStream) -> TokenStream {
    match descriptor {
        TypeDescriptor::Primitive(PrimitiveKind::Boolean) => {
            quote!(::reflectgen::runtime::Value::Bool(*#place))
        }
        TypeDescriptor::Primitive(PrimitiveKind::Integer) => {
            quote!(::reflectgen::runtime::Value::Integer(::std::primitive::i64::from(*#place)))
        }
        TypeDescriptor::Primitive(PrimitiveKind::Floating) => {
            quote!(::reflectgen::runtime::Value::Float(::std::primitive::f64::from(*#place)))
        }
        TypeDescriptor::Text => {
            quote!(::reflectgen::runtime::Value::Text(::std::clone::Clone::clone(#place)))
        }
        TypeDescriptor::Sequence(element) => {
            let element = encode_expr(element, quote!(__element));
            quote! {
                ::reflectgen::runtime::Value::Array(
                    #place.iter().map(|__element| #element).collect()
                )
            }
        }
        TypeDescriptor::Mapping(key, value) => {
            let key = encode_expr(key, quote!(__key));
            let value = encode_expr(value, quote!(__item));
            quote! {
                ::reflectgen::runtime::Value::Pairs(
                    #place.iter().map(|(__key, __item)| (#key, #value)).collect()
                )
            }
        }
        TypeDescriptor::Record(target) => {
            let target = Print::ref_cast(target);
            quote!(#target::encode(#place))
        }
        TypeDescriptor::Opaque(_) => unreachable!("opaque descriptor past admission check"),
    }
}

/// `value` is an expression of type `&Value`.
fn decode_expr(descriptor: &TypeDescriptor, value: TokenStream) -> TokenStream {
    match descriptor {
        TypeDescriptor::Primitive(PrimitiveKind::Boolean) => {
            quote!(::reflectgen::runtime::expect_bool(#value)?)
        }
        TypeDescriptor::Primitive(PrimitiveKind::Integer) => {
            quote! {
                ::std::convert::TryFrom::try_from(
                    ::reflectgen::runtime::expect_integer(#value)?
                )?
            }
        }
        TypeDescriptor::Primitive(PrimitiveKind::Floating) => {
            quote! {
                ::reflectgen::runtime::FromFloat::from_float(
                    ::reflectgen::runtime::expect_float(#value)?
                )
            }
        }
        TypeDescriptor::Text => {
            quote!(::std::borrow::ToOwned::to_owned(::reflectgen::runtime::expect_text(#value)?))
        }
        TypeDescriptor::Sequence(element) => {
            let element = decode_expr(element, quote!(__element));
            quote! {
                ::reflectgen::runtime::expect_array(#value)?
                    .iter()
                    .map(|__element| ::std::result::Result::Ok(#element))
                    .collect::<::std::result::Result<_, ::reflectgen::runtime::DecodeError>>()?
            }
        }
        TypeDescriptor::Mapping(key, value_descriptor) => {
            let key = decode_expr(key, quote!(__key));
            let item = decode_expr(value_descriptor, quote!(__item));
            quote! {
                ::reflectgen::runtime::expect_pairs(#value)?
                    .iter()
                    .map(|(__key, __item)| ::std::result::Result::Ok((#key, #item)))
                    .collect::<::std::result::Result<_, ::reflectgen::runtime::DecodeError>>()?
            }
        }
        TypeDescriptor::Record(target) => {
            let target = Print::ref_cast(target);
            quote!(#target::decode(#value)?)
        }
        TypeDescriptor::Opaque(_) => unreachable!("opaque descriptor past admission check"),
    }
}
