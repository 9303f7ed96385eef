//! Hand-built graphs shared by the unit tests.

use tsiface_schema::{
    FieldDef, Kind, SchemaError, StructTag, TypeGraph, TypeGraphBuilder, TypeIndex, TypeRef,
};

/// Builds a tag carrying only a name annotation.
pub fn json(value: &str) -> StructTag {
    StructTag::from_pairs([("json", value)])
}

/// The employee/department model: two mutually referencing records plus
/// nested anonymous records, maps and slices.
pub struct Company {
    pub graph: TypeGraph,
    pub department: TypeIndex,
    pub employee: TypeIndex,
    pub employee_ptr: TypeIndex,
}

impl Company {
    pub fn department(&self) -> TypeRef<'_> {
        self.resolve(self.department)
    }

    pub fn employee(&self) -> TypeRef<'_> {
        self.resolve(self.employee)
    }

    pub fn employee_ptr(&self) -> TypeRef<'_> {
        self.resolve(self.employee_ptr)
    }

    fn resolve(&self, index: TypeIndex) -> TypeRef<'_> {
        self.graph.resolve(index).expect("fixture index")
    }
}

pub fn company() -> Company {
    build_company().expect("fixture graph")
}

fn build_company() -> Result<Company, SchemaError> {
    let mut b = TypeGraphBuilder::new();
    let int = b.basic(Kind::Int)?;
    let int64 = b.basic(Kind::Int64)?;
    let uint8 = b.basic(Kind::Uint8)?;
    let float64 = b.basic(Kind::Float64)?;
    let string = b.basic(Kind::String)?;
    let boolean = b.basic(Kind::Bool)?;

    let employee = b.declare_record("company", "Employee");
    let department = b.declare_record("company", "Department");
    let employee_ptr = b.pointer(employee)?;

    let geo = b.declare_anonymous_record();
    b.define_fields(
        geo,
        vec![
            FieldDef::new("Latitude", float64).with_tag(json("latitude")),
            FieldDef::new("Longitude", float64).with_tag(json("longitude")),
        ],
    )?;
    let address = b.declare_anonymous_record();
    b.define_fields(
        address,
        vec![
            FieldDef::new("Street", string).with_tag(json("street")),
            FieldDef::new("City", string).with_tag(json("city")),
            FieldDef::new("CountryCode", string).with_tag(json("country_code")),
            FieldDef::new("GeoLocation", geo).with_tag(json("geo_location")),
        ],
    )?;

    let cert = b.declare_anonymous_record();
    b.define_fields(
        cert,
        vec![
            FieldDef::new("CertName", string).with_tag(json("cert_name")),
            FieldDef::new("IssueDate", string).with_tag(json("issue_date")),
        ],
    )?;
    let cert_ptr = b.pointer(cert)?;
    let skill = b.declare_anonymous_record();
    b.define_fields(
        skill,
        vec![
            FieldDef::new("Level", int).with_tag(json("level")),
            FieldDef::new("Certified", boolean).with_tag(json("certified")),
            FieldDef::new("CertDetails", cert_ptr).with_tag(json("cert_details,omitempty")),
        ],
    )?;
    let skills = b.map(string, skill)?;

    let meta = b.declare_anonymous_record();
    b.define_fields(
        meta,
        vec![
            FieldDef::new("Description", string).with_tag(json("description")),
            FieldDef::new("Important", boolean).with_tag(json("important")),
        ],
    )?;
    let metas = b.slice(meta)?;
    let metadata = b.map(int, metas)?;

    let strings = b.slice(string)?;
    let departments = b.slice(department)?;
    let bytes = b.slice(uint8)?;

    b.define_fields(
        employee,
        vec![
            FieldDef::new("ID", int64).with_tag(json("id")),
            FieldDef::new("Name", string).with_tag(json("name")),
            FieldDef::new("Position", string).with_tag(json("position")),
            FieldDef::new("Projects", strings).with_tag(json("projects,omitempty")),
            FieldDef::new("Address", address).with_tag(json("address")),
            FieldDef::new("Departments", departments).with_tag(json("departments")),
            FieldDef::new("Skills", skills).with_tag(json("skills")),
            FieldDef::new("Metadata", metadata).with_tag(json("metadata")),
            FieldDef::new("CustomField", string)
                .with_tag(StructTag::from_pairs([("json", "custom"), ("tstype", "CustomType")])),
            FieldDef::new("Data", bytes).with_tag(json("data")),
        ],
    )?;

    let responsibility = b.declare_anonymous_record();
    b.define_fields(
        responsibility,
        vec![
            FieldDef::new("Description", string).with_tag(json("description")),
            FieldDef::new("Required", boolean).with_tag(json("required")),
        ],
    )?;
    let responsibilities = b.map(string, responsibility)?;
    let members = b.slice(employee_ptr)?;
    let team = b.declare_anonymous_record();
    b.define_fields(
        team,
        vec![
            FieldDef::new("TeamName", string).with_tag(json("team_name")),
            FieldDef::new("TeamLead", employee_ptr).with_tag(json("team_lead,omitempty")),
            FieldDef::new("Members", members).with_tag(json("members,omitempty")),
            FieldDef::new("Responsibilities", responsibilities)
                .with_tag(json("responsibilities")),
        ],
    )?;
    let teams = b.slice(team)?;

    b.define_fields(
        department,
        vec![
            FieldDef::new("Name", string).with_tag(json("name")),
            FieldDef::new("Manager", employee_ptr).with_tag(json("manager,omitempty")),
            FieldDef::new("SubTeams", teams).with_tag(json("sub_teams")),
        ],
    )?;

    Ok(Company {
        graph: b.build(),
        department,
        employee,
        employee_ptr,
    })
}
