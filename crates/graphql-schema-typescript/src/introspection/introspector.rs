use crate::ast;
use crate::introspection::IntrospectionDirective;
use crate::introspection::IntrospectionEnumValue;
use crate::introspection::IntrospectionError;
use crate::introspection::IntrospectionField;
use crate::introspection::IntrospectionInputValue;
use crate::introspection::IntrospectionResult;
use crate::introspection::IntrospectionSchema;
use crate::introspection::IntrospectionType;
use crate::introspection::RootOperation;
use crate::introspection::RootTypeName;
use crate::introspection::SchemaValidationError;
use crate::introspection::TypeKind;
use crate::introspection::TypeRef;
use crate::introspection::value_printer;
use crate::loc;
use crate::schema::Schema;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;

type Result<T> = std::result::Result<T, IntrospectionError>;

/// Names of the scalars every GraphQL schema has, in the order they are
/// listed in an [`IntrospectionResult`].
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = ["String", "Boolean", "Int", "Float", "ID"];

/// The `reason` reported for `@deprecated` when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = ["include", "skip", "deprecated", "specifiedBy"];

/// Runs the equivalent of the standard introspection query against a
/// [`Schema`].
///
/// Type extensions are merged into the types they extend, root operation
/// types are resolved, and the merged schema is checked for the structural
/// problems that would keep it from being built. The `Query`, `Mutation`, and
/// `Subscription` naming conventions only apply when no `schema { }` block
/// was declared.
pub fn introspect(schema: &Schema) -> Result<IntrospectionResult> {
    let mut introspector = Introspector::default();
    let mut extensions = vec![];
    for schema_doc in schema.documents() {
        for def in &schema_doc.document().definitions {
            if let ast::schema::Definition::TypeExtension(ext) = def {
                extensions.push((schema_doc.file_path(), ext));
            }
            introspector.visit_ast_def(schema_doc.file_path(), def)?;
        }
    }
    for (file_path, ext) in extensions {
        introspector.visit_ast_type_extension(file_path, ext)?;
    }

    let query_type = introspector.resolve_root_type(RootOperation::Query)?
        .ok_or(IntrospectionError::NoQueryOperationTypeDefined)?;
    let mutation_type = introspector.resolve_root_type(RootOperation::Mutation)?;
    let subscription_type = introspector.resolve_root_type(RootOperation::Subscription)?;
    check_unique_root_types([
        (RootOperation::Query, Some(&query_type)),
        (RootOperation::Mutation, mutation_type.as_ref()),
        (RootOperation::Subscription, subscription_type.as_ref()),
    ])?;

    let errors = introspector.validate();
    if !errors.is_empty() {
        return Err(IntrospectionError::InvalidSchema { errors });
    }

    let types = introspector.introspect_types();
    log::debug!(
        "Introspected {} types and {} custom directives.",
        types.len(),
        introspector.directive_defs.len(),
    );

    Ok(IntrospectionResult {
        schema: IntrospectionSchema {
            description: None,
            directives: introspector.introspect_directives(),
            mutation_type: mutation_type.map(|name| RootTypeName { name }),
            query_type: RootTypeName { name: query_type },
            subscription_type: subscription_type.map(|name| RootTypeName { name }),
            types,
        },
    })
}

fn check_unique_root_types(
    roots: [(RootOperation, Option<&String>); 3],
) -> Result<()> {
    for (i, (operation1, type1)) in roots.iter().enumerate() {
        for (operation2, type2) in &roots[i + 1..] {
            if let (Some(type1), Some(type2)) = (type1, type2)
                && type1 == type2 {
                return Err(IntrospectionError::NonUniqueOperationTypes {
                    operation1: *operation1,
                    operation2: *operation2,
                    type_name: type1.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[derive(Debug)]
struct TypeDraft {
    def: ast::schema::TypeDefinition,
    def_location: loc::FilePosition,
}

#[derive(Debug)]
struct RootOperationDecl {
    location: loc::FilePosition,
    type_name: String,
}

#[derive(Debug, Default)]
struct Introspector {
    directive_defs: IndexMap<String, (ast::schema::DirectiveDefinition, loc::FilePosition)>,
    mutation_decl: Option<RootOperationDecl>,
    query_decl: Option<RootOperationDecl>,
    saw_schema_block: bool,
    subscription_decl: Option<RootOperationDecl>,
    types: IndexMap<String, TypeDraft>,
}
impl Introspector {
    fn kind_of(&self, type_name: &str) -> Option<TypeKind> {
        if BUILTIN_SCALAR_NAMES.contains(&type_name) {
            return Some(TypeKind::Scalar);
        }
        self.types.get(type_name).map(|draft| type_def_kind(&draft.def))
    }

    fn root_decl_mut(
        &mut self,
        operation: RootOperation,
    ) -> &mut Option<RootOperationDecl> {
        match operation {
            RootOperation::Mutation => &mut self.mutation_decl,
            RootOperation::Query => &mut self.query_decl,
            RootOperation::Subscription => &mut self.subscription_decl,
        }
    }

    fn resolve_root_type(
        &self,
        operation: RootOperation,
    ) -> Result<Option<String>> {
        let declared = match operation {
            RootOperation::Mutation => &self.mutation_decl,
            RootOperation::Query => &self.query_decl,
            RootOperation::Subscription => &self.subscription_decl,
        };

        match declared {
            Some(decl) => match self.kind_of(&decl.type_name) {
                Some(TypeKind::Object) => Ok(Some(decl.type_name.to_owned())),
                _ => Err(IntrospectionError::InvalidRootOperationType {
                    operation,
                    type_name: decl.type_name.to_owned(),
                }),
            },

            None if self.saw_schema_block => Ok(None),

            None => {
                let default_name = operation.default_type_name();
                match self.kind_of(default_name) {
                    Some(TypeKind::Object) => Ok(Some(default_name.to_string())),
                    _ => Ok(None),
                }
            },
        }
    }

    fn type_ref_from_ast(&self, ast_type: &ast::schema::Type) -> TypeRef {
        use ast::schema::Type;
        match ast_type {
            Type::ListType(inner) =>
                TypeRef::list(self.type_ref_from_ast(inner)),
            Type::NamedType(name) =>
                TypeRef::named(
                    self.kind_of(name).unwrap_or(TypeKind::Scalar),
                    name,
                ),
            Type::NonNullType(inner) =>
                TypeRef::non_null(self.type_ref_from_ast(inner)),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: &ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            // Extensions are merged once every type has been collected.
            Definition::TypeExtension(_) => Ok(()),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: &ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(file_path, def.position);

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(IntrospectionError::RedefinitionOfBuiltinDirective {
                directive_name: def.name.to_owned(),
                location: file_position.into(),
            });
        }

        if let Some((_, existing_location)) = self.directive_defs.get(&def.name) {
            return Err(IntrospectionError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_owned(),
                location1: existing_location.clone().into(),
                location2: file_position.into(),
            });
        }

        self.directive_defs.insert(
            def.name.to_owned(),
            (def.clone(), file_position),
        );
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: &ast::schema::SchemaDefinition,
    ) -> Result<()> {
        self.saw_schema_block = true;
        let location = loc::FilePosition::from_pos(file_path, schema_def.position);
        let declared = [
            (RootOperation::Query, &schema_def.query),
            (RootOperation::Mutation, &schema_def.mutation),
            (RootOperation::Subscription, &schema_def.subscription),
        ];

        for (operation, type_name) in declared {
            let Some(type_name) = type_name else {
                continue;
            };

            let slot = self.root_decl_mut(operation);
            if let Some(existing) = slot {
                return Err(IntrospectionError::DuplicateOperationDefinition {
                    operation,
                    location1: existing.location.clone().into(),
                    location2: location.into(),
                });
            }
            *slot = Some(RootOperationDecl {
                location: location.clone(),
                type_name: type_name.to_owned(),
            });
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        let (type_name, position) = type_def_name_and_pos(type_def);
        let def_location = loc::FilePosition::from_pos(file_path, position);

        if type_name.starts_with("__") {
            return Err(IntrospectionError::InvalidDunderPrefixedTypeName {
                def_location: def_location.into(),
                type_name: type_name.to_string(),
            });
        }

        if BUILTIN_SCALAR_NAMES.contains(&type_name) {
            return Err(IntrospectionError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: loc::SchemaDefLocation::GraphQLBuiltIn,
                def2: def_location.into(),
            });
        }

        if let Some(existing) = self.types.get(type_name) {
            return Err(IntrospectionError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: existing.def_location.clone().into(),
                def2: def_location.into(),
            });
        }

        log::trace!("Collected the `{type_name}` type from {def_location}.");
        self.types.insert(type_name.to_string(), TypeDraft {
            def: type_def.clone(),
            def_location,
        });
        Ok(())
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: &Path,
        ext: &ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        let (type_name, position) = type_ext_name_and_pos(ext);
        let extension_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, position).into();

        let Some(draft) = self.types.get_mut(type_name) else {
            return Err(IntrospectionError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_loc,
            });
        };

        match (&mut draft.def, ext) {
            (TypeDefinition::Enum(def), TypeExtension::Enum(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.values.extend(ext.values.iter().cloned());
            },

            (TypeDefinition::InputObject(def), TypeExtension::InputObject(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.fields.extend(ext.fields.iter().cloned());
            },

            (TypeDefinition::Interface(def), TypeExtension::Interface(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.fields.extend(ext.fields.iter().cloned());
                def.implements_interfaces.extend(
                    ext.implements_interfaces.iter().cloned(),
                );
            },

            (TypeDefinition::Object(def), TypeExtension::Object(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.fields.extend(ext.fields.iter().cloned());
                def.implements_interfaces.extend(
                    ext.implements_interfaces.iter().cloned(),
                );
            },

            (TypeDefinition::Scalar(def), TypeExtension::Scalar(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
            },

            (TypeDefinition::Union(def), TypeExtension::Union(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.types.extend(ext.types.iter().cloned());
            },

            (def, _) => return Err(IntrospectionError::InvalidExtensionType {
                extension_loc,
                type_kind: type_def_kind(def),
                type_name: type_name.to_string(),
            }),
        }

        log::trace!("Merged an extension into the `{type_name}` type.");
        Ok(())
    }

    fn validate(&self) -> Vec<SchemaValidationError> {
        use ast::schema::TypeDefinition;

        let mut errors = vec![];
        for (type_name, draft) in &self.types {
            match &draft.def {
                TypeDefinition::Enum(def) => {
                    self.check_directives(type_name, &def.directives, &mut errors);
                    if def.values.is_empty() {
                        errors.push(SchemaValidationError::EnumWithNoValues {
                            type_name: type_name.to_owned(),
                        });
                    }
                    let mut seen = IndexSet::new();
                    for value in &def.values {
                        if !seen.insert(value.name.as_str()) {
                            errors.push(SchemaValidationError::DuplicateEnumValue {
                                enum_name: type_name.to_owned(),
                                value_name: value.name.to_owned(),
                            });
                        }
                        self.check_directives(
                            &format!("{type_name}.{}", value.name),
                            &value.directives,
                            &mut errors,
                        );
                    }
                },

                TypeDefinition::InputObject(def) => {
                    self.check_directives(type_name, &def.directives, &mut errors);
                    if def.fields.is_empty() {
                        errors.push(SchemaValidationError::EmptyFieldSet {
                            type_kind: TypeKind::InputObject,
                            type_name: type_name.to_owned(),
                        });
                    }
                    let mut seen = IndexSet::new();
                    for field in &def.fields {
                        if !seen.insert(field.name.as_str()) {
                            errors.push(SchemaValidationError::DuplicateField {
                                field_name: field.name.to_owned(),
                                type_name: type_name.to_owned(),
                            });
                        }
                        self.check_input_value(
                            &format!("{type_name}.{}", field.name),
                            field,
                            &mut errors,
                        );
                    }
                },

                TypeDefinition::Interface(def) => {
                    self.check_directives(type_name, &def.directives, &mut errors);
                    self.check_fields(
                        type_name,
                        TypeKind::Interface,
                        &def.fields,
                        &mut errors,
                    );
                    self.check_implements(
                        type_name,
                        &def.implements_interfaces,
                        &def.fields,
                        &mut errors,
                    );
                },

                TypeDefinition::Object(def) => {
                    self.check_directives(type_name, &def.directives, &mut errors);
                    self.check_fields(
                        type_name,
                        TypeKind::Object,
                        &def.fields,
                        &mut errors,
                    );
                    self.check_implements(
                        type_name,
                        &def.implements_interfaces,
                        &def.fields,
                        &mut errors,
                    );
                },

                TypeDefinition::Scalar(def) =>
                    self.check_directives(type_name, &def.directives, &mut errors),

                TypeDefinition::Union(def) => {
                    self.check_directives(type_name, &def.directives, &mut errors);
                    if def.types.is_empty() {
                        errors.push(SchemaValidationError::UnionWithNoMembers {
                            type_name: type_name.to_owned(),
                        });
                    }
                    let mut seen = IndexSet::new();
                    for member_name in &def.types {
                        if !seen.insert(member_name.as_str()) {
                            errors.push(SchemaValidationError::DuplicateUnionMember {
                                member_name: member_name.to_owned(),
                                union_name: type_name.to_owned(),
                            });
                            continue;
                        }
                        match self.kind_of(member_name) {
                            Some(TypeKind::Object) => (),
                            Some(_) => errors.push(
                                SchemaValidationError::UnionMemberNotObjectType {
                                    member_name: member_name.to_owned(),
                                    union_name: type_name.to_owned(),
                                },
                            ),
                            None => errors.push(SchemaValidationError::UnknownType {
                                coordinate: type_name.to_owned(),
                                type_name: member_name.to_owned(),
                            }),
                        }
                    }
                },
            }
        }

        for (directive_name, (def, _)) in &self.directive_defs {
            self.check_arguments(
                &format!("@{directive_name}"),
                &def.arguments,
                &mut errors,
            );
        }

        errors
    }

    fn check_arguments(
        &self,
        coordinate: &str,
        arguments: &[ast::schema::InputValue],
        errors: &mut Vec<SchemaValidationError>,
    ) {
        let mut seen = IndexSet::new();
        for arg in arguments {
            if !seen.insert(arg.name.as_str()) {
                errors.push(SchemaValidationError::DuplicateArgument {
                    arg_name: arg.name.to_owned(),
                    coordinate: coordinate.to_string(),
                });
            }
            self.check_input_value(
                &format!("{coordinate}({}:)", arg.name),
                arg,
                errors,
            );
        }
    }

    fn check_directives(
        &self,
        coordinate: &str,
        directives: &[ast::schema::Directive],
        errors: &mut Vec<SchemaValidationError>,
    ) {
        for directive in directives {
            let name = directive.name.as_str();
            if !BUILTIN_DIRECTIVE_NAMES.contains(&name)
                && !self.directive_defs.contains_key(name) {
                errors.push(SchemaValidationError::UnknownDirective {
                    coordinate: coordinate.to_string(),
                    directive_name: name.to_string(),
                });
            }
        }
    }

    fn check_fields(
        &self,
        type_name: &str,
        type_kind: TypeKind,
        fields: &[ast::schema::Field],
        errors: &mut Vec<SchemaValidationError>,
    ) {
        if fields.is_empty() {
            errors.push(SchemaValidationError::EmptyFieldSet {
                type_kind,
                type_name: type_name.to_string(),
            });
        }

        let mut seen = IndexSet::new();
        for field in fields {
            let coordinate = format!("{type_name}.{}", field.name);
            if !seen.insert(field.name.as_str()) {
                errors.push(SchemaValidationError::DuplicateField {
                    field_name: field.name.to_owned(),
                    type_name: type_name.to_string(),
                });
            }
            self.check_directives(&coordinate, &field.directives, errors);

            let field_type_name = innermost_type_name(&field.field_type);
            match self.kind_of(field_type_name) {
                Some(kind) if kind.is_output_type() => (),
                Some(_) => errors.push(SchemaValidationError::OutputFieldWithInputType {
                    coordinate: coordinate.to_owned(),
                    invalid_type_name: field_type_name.to_string(),
                }),
                None => errors.push(SchemaValidationError::UnknownType {
                    coordinate: coordinate.to_owned(),
                    type_name: field_type_name.to_string(),
                }),
            }

            self.check_arguments(&coordinate, &field.arguments, errors);
        }
    }

    fn check_implements(
        &self,
        type_name: &str,
        implements: &[String],
        fields: &[ast::schema::Field],
        errors: &mut Vec<SchemaValidationError>,
    ) {
        use ast::schema::TypeDefinition;

        let mut seen = IndexSet::new();
        for interface_name in implements {
            if !seen.insert(interface_name.as_str()) {
                errors.push(SchemaValidationError::DuplicateImplementsDeclaration {
                    interface_name: interface_name.to_owned(),
                    type_name: type_name.to_string(),
                });
                continue;
            }

            match self.types.get(interface_name).map(|draft| &draft.def) {
                Some(TypeDefinition::Interface(iface)) => {
                    for iface_field in &iface.fields {
                        if !fields.iter().any(|f| f.name == iface_field.name) {
                            errors.push(SchemaValidationError::MissingInterfaceField {
                                field_name: iface_field.name.to_owned(),
                                interface_name: interface_name.to_owned(),
                                type_name: type_name.to_string(),
                            });
                        }
                    }
                },
                Some(_) => errors.push(SchemaValidationError::ImplementsNonInterfaceType {
                    non_interface_name: interface_name.to_owned(),
                    type_name: type_name.to_string(),
                }),
                None if BUILTIN_SCALAR_NAMES.contains(&interface_name.as_str()) =>
                    errors.push(SchemaValidationError::ImplementsNonInterfaceType {
                        non_interface_name: interface_name.to_owned(),
                        type_name: type_name.to_string(),
                    }),
                None => errors.push(SchemaValidationError::UnknownType {
                    coordinate: type_name.to_string(),
                    type_name: interface_name.to_owned(),
                }),
            }
        }
    }

    fn check_input_value(
        &self,
        coordinate: &str,
        input_value: &ast::schema::InputValue,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        self.check_directives(coordinate, &input_value.directives, errors);

        let value_type_name = innermost_type_name(&input_value.value_type);
        match self.kind_of(value_type_name) {
            Some(kind) if kind.is_input_type() => (),
            Some(_) => errors.push(SchemaValidationError::InputPositionWithOutputType {
                coordinate: coordinate.to_string(),
                invalid_type_name: value_type_name.to_string(),
            }),
            None => errors.push(SchemaValidationError::UnknownType {
                coordinate: coordinate.to_string(),
                type_name: value_type_name.to_string(),
            }),
        }
    }

    fn introspect_directives(&self) -> Vec<IntrospectionDirective> {
        let mut directives = self.directive_defs.values()
            .map(|(def, _)| IntrospectionDirective {
                args: def.arguments.iter()
                    .map(|arg| self.introspect_input_value(arg))
                    .collect(),
                description: def.description.to_owned(),
                is_repeatable: def.repeatable,
                locations: def.locations.iter()
                    .map(|location| location.as_str().to_string())
                    .collect(),
                name: def.name.to_owned(),
            })
            .collect::<Vec<_>>();
        directives.extend(builtin_directives());
        directives
    }

    fn introspect_field(&self, field: &ast::schema::Field) -> IntrospectionField {
        let (is_deprecated, deprecation_reason) = deprecation_of(&field.directives);
        IntrospectionField {
            args: field.arguments.iter()
                .map(|arg| self.introspect_input_value(arg))
                .collect(),
            deprecation_reason,
            description: field.description.to_owned(),
            is_deprecated,
            name: field.name.to_owned(),
            type_ref: self.type_ref_from_ast(&field.field_type),
        }
    }

    fn introspect_input_value(
        &self,
        input_value: &ast::schema::InputValue,
    ) -> IntrospectionInputValue {
        let (is_deprecated, deprecation_reason) =
            deprecation_of(&input_value.directives);
        IntrospectionInputValue {
            default_value: input_value.default_value.as_ref()
                .map(value_printer::print_value),
            deprecation_reason,
            description: input_value.description.to_owned(),
            is_deprecated,
            name: input_value.name.to_owned(),
            type_ref: self.type_ref_from_ast(&input_value.value_type),
        }
    }

    fn introspect_interface_refs(&self, names: &[String]) -> Vec<TypeRef> {
        names.iter()
            .map(|name| TypeRef::named(TypeKind::Interface, name))
            .collect()
    }

    fn introspect_types(&self) -> Vec<IntrospectionType> {
        use ast::schema::TypeDefinition;

        let mut types = self.types.iter()
            .map(|(type_name, draft)| {
                let mut introspected = empty_type(type_def_kind(&draft.def), type_name);
                match &draft.def {
                    TypeDefinition::Enum(def) => {
                        introspected.description = def.description.to_owned();
                        introspected.enum_values = Some(def.values.iter().map(|value| {
                            let (is_deprecated, deprecation_reason) =
                                deprecation_of(&value.directives);
                            IntrospectionEnumValue {
                                deprecation_reason,
                                description: value.description.to_owned(),
                                is_deprecated,
                                name: value.name.to_owned(),
                            }
                        }).collect());
                    },

                    TypeDefinition::InputObject(def) => {
                        introspected.description = def.description.to_owned();
                        introspected.input_fields = Some(def.fields.iter()
                            .map(|field| self.introspect_input_value(field))
                            .collect());
                    },

                    TypeDefinition::Interface(def) => {
                        introspected.description = def.description.to_owned();
                        introspected.fields = Some(def.fields.iter()
                            .map(|field| self.introspect_field(field))
                            .collect());
                        introspected.interfaces =
                            Some(self.introspect_interface_refs(&def.implements_interfaces));
                        introspected.possible_types = Some(self.implementations_of(type_name));
                    },

                    TypeDefinition::Object(def) => {
                        introspected.description = def.description.to_owned();
                        introspected.fields = Some(def.fields.iter()
                            .map(|field| self.introspect_field(field))
                            .collect());
                        introspected.interfaces =
                            Some(self.introspect_interface_refs(&def.implements_interfaces));
                    },

                    TypeDefinition::Scalar(def) => {
                        introspected.description = def.description.to_owned();
                        introspected.specified_by_url = specified_by_url_of(&def.directives);
                    },

                    TypeDefinition::Union(def) => {
                        introspected.description = def.description.to_owned();
                        introspected.possible_types = Some(def.types.iter()
                            .map(|name| TypeRef::named(TypeKind::Object, name))
                            .collect());
                    },
                }
                introspected
            })
            .collect::<Vec<_>>();

        let referenced = self.referenced_type_names();
        for (name, description) in BUILTIN_SCALAR_NAMES.iter().zip(BUILTIN_SCALAR_DESCRIPTIONS) {
            // String and Boolean are always referenced by the introspection
            // meta-types.
            let always_present = matches!(*name, "String" | "Boolean");
            if always_present || referenced.contains(name) {
                let mut scalar = empty_type(TypeKind::Scalar, name);
                scalar.description = Some(description.to_string());
                types.push(scalar);
            }
        }

        types
    }

    /// Object types that declare they implement `interface_name`, in type
    /// order.
    fn implementations_of(&self, interface_name: &str) -> Vec<TypeRef> {
        use ast::schema::TypeDefinition;
        self.types.iter()
            .filter_map(|(name, draft)| match &draft.def {
                TypeDefinition::Object(obj)
                    if obj.implements_interfaces.iter().any(|i| i == interface_name)
                    => Some(TypeRef::named(TypeKind::Object, name)),
                _ => None,
            })
            .collect()
    }

    fn referenced_type_names(&self) -> IndexSet<&str> {
        use ast::schema::TypeDefinition;

        fn visit_input_values<'a>(
            values: &'a [ast::schema::InputValue],
            out: &mut IndexSet<&'a str>,
        ) {
            for value in values {
                out.insert(innermost_type_name(&value.value_type));
            }
        }

        let mut names = IndexSet::new();
        for draft in self.types.values() {
            let fields = match &draft.def {
                TypeDefinition::Interface(def) => &def.fields,
                TypeDefinition::Object(def) => &def.fields,
                TypeDefinition::InputObject(def) => {
                    visit_input_values(&def.fields, &mut names);
                    continue;
                },
                _ => continue,
            };
            for field in fields {
                names.insert(innermost_type_name(&field.field_type));
                visit_input_values(&field.arguments, &mut names);
            }
        }
        for (def, _) in self.directive_defs.values() {
            visit_input_values(&def.arguments, &mut names);
        }
        names
    }
}

const BUILTIN_SCALAR_DESCRIPTIONS: [&str; 5] = [
    "The `String` scalar type represents textual data, represented as UTF-8 \
     character sequences. The String type is most often used by GraphQL to \
     represent free-form human-readable text.",
    "The `Boolean` scalar type represents `true` or `false`.",
    "The `Int` scalar type represents non-fractional signed whole numeric \
     values. Int can represent values between -(2^31) and 2^31 - 1.",
    "The `Float` scalar type represents signed double-precision fractional \
     values as specified by \
     [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point).",
    "The `ID` scalar type represents a unique identifier, often used to \
     refetch an object or as key for a cache. The ID type appears in a JSON \
     response as a String; however, it is not intended to be human-readable. \
     When expected as an input type, any string (such as `\"4\"`) or integer \
     (such as `4`) input value will be accepted as an ID.",
];

fn builtin_directives() -> Vec<IntrospectionDirective> {
    let arg = |name: &str, description: &str, type_ref: TypeRef, default_value: Option<&str>| {
        IntrospectionInputValue {
            default_value: default_value.map(str::to_string),
            deprecation_reason: None,
            description: Some(description.to_string()),
            is_deprecated: false,
            name: name.to_string(),
            type_ref,
        }
    };
    let non_null_scalar = |name: &str| {
        TypeRef::non_null(TypeRef::named(TypeKind::Scalar, name))
    };
    fn locations(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    vec![
        IntrospectionDirective {
            args: vec![arg("if", "Included when true.", non_null_scalar("Boolean"), None)],
            description: Some(
                "Directs the executor to include this field or fragment only \
                 when the `if` argument is true.".to_string(),
            ),
            is_repeatable: false,
            locations: locations(&["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]),
            name: "include".to_string(),
        },
        IntrospectionDirective {
            args: vec![arg("if", "Skipped when true.", non_null_scalar("Boolean"), None)],
            description: Some(
                "Directs the executor to skip this field or fragment when the \
                 `if` argument is true.".to_string(),
            ),
            is_repeatable: false,
            locations: locations(&["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]),
            name: "skip".to_string(),
        },
        IntrospectionDirective {
            args: vec![arg(
                "reason",
                "Explains why this element was deprecated, usually also \
                 including a suggestion for how to access supported similar \
                 data. Formatted using the Markdown syntax, as specified by \
                 [CommonMark](https://commonmark.org/).",
                TypeRef::named(TypeKind::Scalar, "String"),
                Some("\"No longer supported\""),
            )],
            description: Some(
                "Marks an element of a GraphQL schema as no longer supported."
                    .to_string(),
            ),
            is_repeatable: false,
            locations: locations(&[
                "FIELD_DEFINITION",
                "ARGUMENT_DEFINITION",
                "INPUT_FIELD_DEFINITION",
                "ENUM_VALUE",
            ]),
            name: "deprecated".to_string(),
        },
        IntrospectionDirective {
            args: vec![arg(
                "url",
                "The URL that specifies the behavior of this scalar.",
                non_null_scalar("String"),
                None,
            )],
            description: Some(
                "Exposes a URL that specifies the behavior of this scalar."
                    .to_string(),
            ),
            is_repeatable: false,
            locations: locations(&["SCALAR"]),
            name: "specifiedBy".to_string(),
        },
    ]
}

fn deprecation_of(directives: &[ast::schema::Directive]) -> (bool, Option<String>) {
    let Some(deprecated) = directives.iter().find(|d| d.name == "deprecated") else {
        return (false, None);
    };

    let reason = string_arg(deprecated, "reason")
        .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string());
    (true, Some(reason))
}

fn empty_type(kind: TypeKind, name: &str) -> IntrospectionType {
    IntrospectionType {
        description: None,
        enum_values: None,
        fields: None,
        input_fields: None,
        interfaces: None,
        kind,
        name: name.to_string(),
        possible_types: None,
        specified_by_url: None,
    }
}

fn innermost_type_name(ast_type: &ast::schema::Type) -> &str {
    use ast::schema::Type;
    match ast_type {
        Type::ListType(inner) | Type::NonNullType(inner) => innermost_type_name(inner),
        Type::NamedType(name) => name.as_str(),
    }
}

fn specified_by_url_of(directives: &[ast::schema::Directive]) -> Option<String> {
    directives.iter()
        .find(|d| d.name == "specifiedBy")
        .and_then(|d| string_arg(d, "url"))
}

fn string_arg(directive: &ast::schema::Directive, arg_name: &str) -> Option<String> {
    directive.arguments.iter()
        .find(|(name, _)| name == arg_name)
        .and_then(|(_, value)| match value {
            ast::schema::Value::String(s) => Some(s.to_owned()),
            _ => None,
        })
}

fn type_def_kind(def: &ast::schema::TypeDefinition) -> TypeKind {
    use ast::schema::TypeDefinition;
    match def {
        TypeDefinition::Enum(_) => TypeKind::Enum,
        TypeDefinition::InputObject(_) => TypeKind::InputObject,
        TypeDefinition::Interface(_) => TypeKind::Interface,
        TypeDefinition::Object(_) => TypeKind::Object,
        TypeDefinition::Scalar(_) => TypeKind::Scalar,
        TypeDefinition::Union(_) => TypeKind::Union,
    }
}

fn type_def_name_and_pos(def: &ast::schema::TypeDefinition) -> (&str, ast::schema::Pos) {
    use ast::schema::TypeDefinition;
    match def {
        TypeDefinition::Enum(t) => (t.name.as_str(), t.position),
        TypeDefinition::InputObject(t) => (t.name.as_str(), t.position),
        TypeDefinition::Interface(t) => (t.name.as_str(), t.position),
        TypeDefinition::Object(t) => (t.name.as_str(), t.position),
        TypeDefinition::Scalar(t) => (t.name.as_str(), t.position),
        TypeDefinition::Union(t) => (t.name.as_str(), t.position),
    }
}

fn type_ext_name_and_pos(ext: &ast::schema::TypeExtension) -> (&str, ast::schema::Pos) {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(t) => (t.name.as_str(), t.position),
        TypeExtension::InputObject(t) => (t.name.as_str(), t.position),
        TypeExtension::Interface(t) => (t.name.as_str(), t.position),
        TypeExtension::Object(t) => (t.name.as_str(), t.position),
        TypeExtension::Scalar(t) => (t.name.as_str(), t.position),
        TypeExtension::Union(t) => (t.name.as_str(), t.position),
    }
}
