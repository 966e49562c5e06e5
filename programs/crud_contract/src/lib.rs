use anchor_lang::prelude::*;

pub mod client;

declare_id!("coUnmi3oBUtwtd9fjeAvSsJssXh5A5xyPbhpewyzRVF");

// seed prefixes for the two PDA families
pub const GLOBAL_SEED: &[u8] = b"global";
pub const TEXT_SEED: &[u8] = b"text";

// helper: length limits shared by create and update
fn check_lengths(title: &str, content: &str) -> Result<()> {
    require!(title.len() <= Text::MAX_TITLE_LEN, CrudError::TitleTooLong);
    require!(content.len() <= Text::MAX_CONTENT_LEN, CrudError::ContentTooLong);
    Ok(())
}

#[program]
pub mod crud_contract {
    use super::*;

    /// Creates the global singleton. Can only succeed once per deployment since the
    /// account is `init` at a fixed seed.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let admin = ctx.accounts.signer.key();
        ctx.accounts
            .global_account
            .initialize(admin, ctx.bumps.global_account);

        msg!("initialize: admin={} global={}", admin, ctx.accounts.global_account.key());
        Ok(())
    }

    /// Stores a new text at the PDA derived from the current counter, then bumps the counter.
    /// - The text id is the counter value before this call.
    /// - created_at and updated_at both take the current cluster time.
    pub fn create_text(ctx: Context<CreateText>, title: String, content: String) -> Result<()> {
        let clock = Clock::get()?;
        let owner = ctx.accounts.signer.key();
        // the PDA was derived from the pre-increment counter, which is the id handed out here
        let id = ctx.accounts.global_account.record_creation()?;

        ctx.accounts.create_account.create(
            id,
            owner,
            title,
            content,
            &clock,
            ctx.bumps.create_account,
        )?;

        msg!(
            "create_text: id={} owner={} account={}",
            id,
            owner,
            ctx.accounts.create_account.key()
        );
        Ok(())
    }

    /// Returns a copy of the text through return data.
    pub fn read(ctx: Context<ReadText>, id: u64) -> Result<Text> {
        let text: &Text = &ctx.accounts.read_account;
        msg!("read: id={}", id);
        Ok(text.clone())
    }

    /// Replaces title and content of an existing text. Only the owner may update; the
    /// id argument is only used to resolve the PDA in `UpdateText`.
    pub fn update(ctx: Context<UpdateText>, id: u64, title: String, content: String) -> Result<()> {
        let clock = Clock::get()?;
        ctx.accounts.update_account.revise(title, content, &clock)?;

        msg!("update: id={} updated_at={}", id, clock.unix_timestamp);
        Ok(())
    }

    /// Closes a text account, refunding rent to the signer. The owner or the global admin
    /// may delete. The counter is left as is so ids are never reused.
    pub fn delete(ctx: Context<DeleteText>, id: u64) -> Result<()> {
        let signer = ctx.accounts.signer.key();
        let admin = ctx.accounts.global_account.admin;
        require!(
            ctx.accounts.delete_account.can_be_deleted_by(&signer, &admin),
            CrudError::Unauthorized
        );

        // account itself is closed by `close = signer` on exit
        msg!("delete: id={} by={}", id, signer);
        Ok(())
    }
}

/* ---------------------- ACCOUNTS ---------------------- */

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the admin and pays for the global account
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + GlobalState::INIT_SPACE,
        seeds = [GLOBAL_SEED],
        bump
    )]
    pub global_account: Account<'info, GlobalState>,

    pub system_program: Program<'info, System>,
}

// Text PDAs: [b"text", 0] -> first text, [b"text", 1] -> second, ...
// The counter is re-read from the validated global PDA so callers cannot pick the id.
#[derive(Accounts)]
pub struct CreateText<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump
    )]
    pub global_account: Account<'info, GlobalState>,

    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + Text::INIT_SPACE,
        seeds = [TEXT_SEED, global_account.total_text_created.to_le_bytes().as_ref()],
        bump
    )]
    pub create_account: Account<'info, Text>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ReadText<'info> {
    #[account(
        seeds = [GLOBAL_SEED],
        bump = global_account.bump
    )]
    pub global_account: Account<'info, GlobalState>,

    #[account(
        seeds = [TEXT_SEED, id.to_le_bytes().as_ref()],
        bump = read_account.bump
    )]
    pub read_account: Account<'info, Text>,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct UpdateText<'info> {
    #[account(
        mut,
        seeds = [TEXT_SEED, id.to_le_bytes().as_ref()],
        bump = update_account.bump,
        constraint = update_account.owner == signer.key() @ CrudError::Unauthorized,
    )]
    pub update_account: Account<'info, Text>,

    #[account(mut)]
    pub signer: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct DeleteText<'info> {
    /// Read for the admin key only
    #[account(
        seeds = [GLOBAL_SEED],
        bump = global_account.bump
    )]
    pub global_account: Account<'info, GlobalState>,

    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [TEXT_SEED, id.to_le_bytes().as_ref()],
        bump = delete_account.bump,
        close = signer
    )]
    pub delete_account: Account<'info, Text>,
}

/* ---------------------- STATE ---------------------- */

#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct GlobalState {
    pub admin: Pubkey,
    pub total_text_created: u64, // also the id of the next text
    pub bump: u8,
}

impl GlobalState {
    pub fn address(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[GLOBAL_SEED], program_id)
    }

    pub fn initialize(&mut self, admin: Pubkey, bump: u8) {
        self.admin = admin;
        self.total_text_created = 0;
        self.bump = bump;
    }

    /// Consumes the next id. Returns the id that was handed out.
    pub fn record_creation(&mut self) -> Result<u64> {
        let id = self.total_text_created;
        self.total_text_created = id.checked_add(1).ok_or(CrudError::CounterOverflow)?;
        Ok(id)
    }
}

#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct Text {
    pub id: u64,
    pub owner: Pubkey,
    #[max_len(50)]
    pub title: String,
    #[max_len(1000)]
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl Text {
    // must agree with the max_len attributes above
    pub const MAX_TITLE_LEN: usize = 50;
    pub const MAX_CONTENT_LEN: usize = 1000;

    pub fn seed_id(id: u64) -> [u8; 8] {
        id.to_le_bytes()
    }

    pub fn address(id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[TEXT_SEED, &Self::seed_id(id)], program_id)
    }

    pub fn create(
        &mut self,
        id: u64,
        owner: Pubkey,
        title: String,
        content: String,
        clock: &Clock,
        bump: u8,
    ) -> Result<()> {
        check_lengths(&title, &content)?;

        self.id = id;
        self.owner = owner;
        self.title = title;
        self.content = content;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        self.bump = bump;
        Ok(())
    }

    pub fn revise(&mut self, title: String, content: String, clock: &Clock) -> Result<()> {
        check_lengths(&title, &content)?;

        self.title = title;
        self.content = content;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    pub fn can_be_deleted_by(&self, signer: &Pubkey, admin: &Pubkey) -> bool {
        self.owner == *signer || *admin == *signer
    }
}

/* ---------------------- ERRORS ---------------------- */

#[error_code]
pub enum CrudError {
    #[msg("Signer is not allowed to modify this text")]
    Unauthorized,
    #[msg("Title exceeds the maximum length")]
    TitleTooLong,
    #[msg("Content exceeds the maximum length")]
    ContentTooLong,
    #[msg("Text counter overflowed")]
    CounterOverflow,
}
